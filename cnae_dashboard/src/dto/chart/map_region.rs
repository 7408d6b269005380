use crate::common::*;

use crate::dto::agg::region_value::*;

#[doc = "municipio 명 매칭용 정규화 (앞뒤 공백 제거, 대문자)"]
pub fn normalize_region_name(name: &str) -> String {
    name.trim().to_uppercase()
}

#[doc = "GeoJSON geometry 에서 외곽 링만 (경도, 위도) 목록으로 꺼낸다."]
fn exterior_rings(geometry: &geojson::Geometry) -> Vec<Vec<(f64, f64)>> {
    let to_ring = |ring: &Vec<Vec<f64>>| -> Vec<(f64, f64)> {
        ring.iter()
            .filter(|pos| pos.len() >= 2)
            .map(|pos| (pos[0], pos[1]))
            .collect()
    };

    match &geometry.value {
        geojson::Value::Polygon(rings) => rings.first().map(to_ring).into_iter().collect(),
        geojson::Value::MultiPolygon(polygons) => polygons
            .iter()
            .filter_map(|rings| rings.first().map(to_ring))
            .collect(),
        geojson::Value::GeometryCollection(geometries) => {
            geometries.iter().flat_map(exterior_rings).collect()
        }
        _ => Vec::new(),
    }
}

#[doc = r#"
    단계구분도에 그릴 municipio 하나.

    # Fields
    * `name` - GeoJSON 이름 속성값
    * `rings` - 외곽 링 목록 (MultiPolygon 은 여러 개), 좌표는 (경도, 위도)
    * `value` - 매칭된 집계값, 데이터가 없으면 `None`
    * `highlighted` - 사이드바에서 선택된 municipio 여부
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct MapRegion {
    pub name: String,
    pub rings: Vec<Vec<(f64, f64)>>,
    pub value: Option<i64>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ChoroplethData {
    pub regions: Vec<MapRegion>,
}

impl ChoroplethData {
    #[doc = r#"
        GeoJSON 피처와 지역별 집계값을 이름으로 조인한다.

        1. 피처의 `name_property` 속성값을 지역명으로 사용 (없으면 경고 후 제외)
        2. 대소문자/공백 무시하고 `values` 와 매칭, 매칭 실패 시 `value = None`
        3. `selected` 에 포함된 municipio 는 강조 표시
    "#]
    pub fn from_features(
        collection: &FeatureCollection,
        name_property: &str,
        values: &[RegionValue],
        selected: &BTreeSet<String>,
    ) -> Self {
        let value_by_name: BTreeMap<String, i64> = values
            .iter()
            .map(|v| (normalize_region_name(v.region_name()), *v.value()))
            .collect();

        let selected_names: BTreeSet<String> =
            selected.iter().map(|s| normalize_region_name(s)).collect();

        let mut regions: Vec<MapRegion> = Vec::new();

        for feature in &collection.features {
            let name: &str = match feature.property(name_property).and_then(|v| v.as_str()) {
                Some(name) => name,
                None => {
                    warn!(
                        "[ChoroplethData->from_features] Feature without '{}' property skipped",
                        name_property
                    );
                    continue;
                }
            };

            let rings: Vec<Vec<(f64, f64)>> = match &feature.geometry {
                Some(geometry) => exterior_rings(geometry),
                None => Vec::new(),
            };

            if rings.is_empty() {
                warn!(
                    "[ChoroplethData->from_features] Feature '{}' has no polygon geometry",
                    name
                );
                continue;
            }

            let key: String = normalize_region_name(name);

            regions.push(MapRegion::new(
                name.to_string(),
                rings,
                value_by_name.get(&key).copied(),
                selected_names.contains(&key),
            ));
        }

        ChoroplethData::new(regions)
    }

    #[doc = "(min_lon, max_lon, min_lat, max_lat), 좌표가 없으면 None"]
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut points = self
            .regions
            .iter()
            .flat_map(|r| r.rings.iter())
            .flat_map(|ring| ring.iter());

        let first: &(f64, f64) = points.next()?;
        let init: (f64, f64, f64, f64) = (first.0, first.0, first.1, first.1);

        Some(points.fold(init, |(min_x, max_x, min_y, max_y), (x, y)| {
            (min_x.min(*x), max_x.max(*x), min_y.min(*y), max_y.max(*y))
        }))
    }

    #[doc = "값이 있는 지역들의 (min, max)"]
    pub fn value_range(&self) -> Option<(i64, i64)> {
        let values: Vec<i64> = self.regions.iter().filter_map(|r| r.value).collect();
        let min: i64 = *values.iter().min()?;
        let max: i64 = *values.iter().max()?;
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_collection() -> FeatureCollection {
        r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "name": "Florianópolis" },
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[-48.6, -27.7], [-48.4, -27.7], [-48.4, -27.4], [-48.6, -27.7]]]
                    }
                },
                {
                    "type": "Feature",
                    "properties": { "name": "São José" },
                    "geometry": {
                        "type": "MultiPolygon",
                        "coordinates": [
                            [[[-48.7, -27.6], [-48.6, -27.6], [-48.6, -27.5], [-48.7, -27.6]]],
                            [[[-48.8, -27.6], [-48.75, -27.6], [-48.75, -27.55], [-48.8, -27.6]]]
                        ]
                    }
                },
                {
                    "type": "Feature",
                    "properties": { "codigo": "4205407" },
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[-49.0, -27.0], [-48.9, -27.0], [-48.9, -26.9], [-49.0, -27.0]]]
                    }
                }
            ]
        }"#
        .parse()
        .unwrap()
    }

    #[test]
    fn joins_values_by_normalized_name() {
        let values: Vec<RegionValue> = vec![
            RegionValue::new(" florianópolis".to_string(), 500),
            RegionValue::new("Palhoça".to_string(), 70),
        ];
        let selected: BTreeSet<String> = ["São José".to_string()].into_iter().collect();

        let data: ChoroplethData =
            ChoroplethData::from_features(&sample_collection(), "name", &values, &selected);

        assert_eq!(data.regions().len(), 2);

        let floripa: &MapRegion = &data.regions()[0];
        assert_eq!(*floripa.value(), Some(500));
        assert!(!floripa.highlighted());
        assert_eq!(floripa.rings().len(), 1);

        let sao_jose: &MapRegion = &data.regions()[1];
        assert_eq!(*sao_jose.value(), None);
        assert!(*sao_jose.highlighted());
        assert_eq!(sao_jose.rings().len(), 2);
    }

    #[test]
    fn bounds_and_value_range_cover_all_regions() {
        let data: ChoroplethData = ChoroplethData::new(vec![
            MapRegion::new(
                "A".to_string(),
                vec![vec![(-49.0, -27.0), (-48.5, -27.0), (-48.5, -26.5)]],
                Some(10),
                false,
            ),
            MapRegion::new(
                "B".to_string(),
                vec![vec![(-53.0, -29.0), (-52.0, -28.0)]],
                None,
                true,
            ),
        ]);

        assert_eq!(data.bounds(), Some((-53.0, -48.5, -29.0, -26.5)));
        assert_eq!(data.value_range(), Some((10, 10)));
        assert_eq!(ChoroplethData::new(vec![]).bounds(), None);
    }
}
