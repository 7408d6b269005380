use crate::common::*;

use crate::model::configs::{chart_config::*, dataset_config::*, system_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_server_config);

#[doc = "Function to initialize Server configuration information instances"]
pub fn initialize_server_config() -> TotalConfig {
    info!("initialize_server_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    pub system: SystemConfig,
}

#[doc = "입력 데이터셋(CSV, GeoJSON) 설정 정보"]
pub fn get_dataset_config_info() -> &'static DatasetConfig {
    &TOTAL_CONFIG.dataset
}

#[doc = "차트 렌더링 설정 정보"]
pub fn get_chart_config_info() -> &'static ChartConfig {
    &TOTAL_CONFIG.chart
}

#[doc = "system 설정 정보"]
pub fn get_system_config_info() -> &'static SystemConfig {
    &TOTAL_CONFIG.system
}

impl TotalConfig {
    fn new() -> Self {
        match Self::load(&SERVER_CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                /* 전역 로거가 이 설정을 읽어 초기화되므로, 이 시점에는 stderr 로만 알릴 수 있다 */
                eprintln!("[TotalConfig->new] {:?}", e);
                error!("[TotalConfig->new] {:?}", e);
                std::process::exit(1);
            }
        }
    }

    fn load(config_path: &str) -> anyhow::Result<Self> {
        read_toml_from_file::<TotalConfig>(config_path).with_context(|| {
            format!(
                "Failed to convert the data from SERVER_CONFIG_PATH ('{}') into the TotalConfig structure.",
                config_path
            )
        })
    }
}
