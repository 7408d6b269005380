use crate::common::*;

#[derive(Debug, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct DatasetConfig {
    pub csv_path: String,
    pub geojson_path: String,
    #[serde(default = "default_region_name_property")]
    pub region_name_property: String,
}

fn default_region_name_property() -> String {
    String::from("name")
}
