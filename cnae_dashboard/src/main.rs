/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description : 시/군(municipio) 별 CNAE 고용 재고 CSV 를 섹션으로 분류하고,
              필터 파일에 따라 막대/선/지도 차트와 HTML 대시보드를 생성하는 프로그램.

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod dto;

mod enums;

mod repository;
use repository::dataset_repository_impl::*;

mod env_configuration;
use env_configuration::env_config::*;

mod traits;

mod model;
use model::{configs::total_config::*, filter::filter_config::*};

mod utils_modules;
use utils_modules::{io_utils::*, logger_utils::*};

mod service;
use service::{
    aggregate_service_impl::*, chart_service_impl::*, dashboard_service_impl::*,
    page_service_impl::*,
};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    set_global_logger();

    info!("CNAE dashboard program start!");

    let dataset_config = get_dataset_config_info();
    let chart_config = get_chart_config_info();
    let output_dir: PathBuf = PathBuf::from(chart_config.output_dir());

    /* 사이드바 필터 파일 */
    let filter_config: FilterConfig = read_toml_from_file::<FilterConfig>(&FILTER_CONFIG_PATH)
        .unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while reading FILTER_CONFIG_PATH.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    /* 의존 주입 */
    let dataset_repository: DatasetRepositoryImpl =
        DatasetRepositoryImpl::from_config(dataset_config);

    let page_service: PageServiceImpl<AggregateServiceImpl, ChartServiceImpl> =
        PageServiceImpl::new(
            AggregateServiceImpl::new(),
            ChartServiceImpl::new(*chart_config.width(), *chart_config.height()),
            output_dir.clone(),
            dataset_config.region_name_property().clone(),
        );

    let dashboard_service: DashboardServiceImpl =
        DashboardServiceImpl::new(output_dir, PathBuf::from(HTML_TEMPLATE_PATH.as_str()));

    let main_controller: MainController<
        DatasetRepositoryImpl,
        PageServiceImpl<AggregateServiceImpl, ChartServiceImpl>,
        DashboardServiceImpl,
    > = MainController::new(dataset_repository, page_service, dashboard_service);

    match main_controller.main_task(&filter_config).await {
        Ok(index_path) => info!("CNAE dashboard program end: {:?}", index_path),
        Err(e) => {
            error!("{:?}", e);
            panic!("{:?}", e)
        }
    }
}
