use crate::common::*;

#[derive(Debug, Deserialize, Serialize, Getters, Clone)]
#[getset(get = "pub")]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub output_dir: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 700,
            output_dir: String::from("./dashboard"),
        }
    }
}
