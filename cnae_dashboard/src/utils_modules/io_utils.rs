use crate::common::*;

#[doc = r#"
    TOML 형식의 설정 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    서버 설정과 사이드바 필터 파일을 TOML 로 관리하며, 이 함수를 통해 구조체로 변환한다.

    # Type Parameters
    * `T` - `DeserializeOwned` 트레이트를 구현한 구조체 타입

    # Arguments
    * `file_path` - 읽을 TOML 파일의 경로

    # Errors
    - 파일이 존재하지 않거나 읽기 권한이 없는 경우
    - TOML 형식이 잘못되었거나 구조체 필드와 키가 일치하지 않는 경우
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)
        .with_context(|| format!("[read_toml_from_file] Failed to read '{}'", file_path))?;
    let toml: T = toml::from_str(&toml_content)
        .with_context(|| format!("[read_toml_from_file] Failed to parse '{}'", file_path))?;

    Ok(toml)
}

#[doc = r#"
    구조체를 보기 좋게 들여쓴 JSON 파일로 저장한다.
    대시보드의 페이지별 집계 데이터를 차트 이미지 옆에 남길 때 사용한다.
"#]
pub fn write_json_to_file<T: Serialize>(file_path: &Path, input_struct: &T) -> Result<(), anyhow::Error> {
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json_str: String = serde_json::to_string_pretty(input_struct).map_err(|err| {
        anyhow!(
            "[Error][write_json_to_file()] Failed to serialize struct to JSON: {}",
            err
        )
    })?;

    fs::write(file_path, json_str)
        .with_context(|| format!("[write_json_to_file] Failed to write {:?}", file_path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn reads_toml_and_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path: PathBuf = dir.path().join("sample.toml");
        fs::write(&toml_path, "name = \"Tubarão\"\ncount = 3\n").unwrap();

        let sample: Sample = read_toml_from_file(toml_path.to_str().unwrap()).unwrap();
        assert_eq!(sample, Sample { name: "Tubarão".to_string(), count: 3 });

        let json_path: PathBuf = dir.path().join("out").join("sample.json");
        write_json_to_file(&json_path, &sample).unwrap();
        let written: Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(written["count"], json!(3));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result: anyhow::Result<Sample> = read_toml_from_file("/nonexistent/sample.toml");
        assert!(result.is_err());
    }
}
