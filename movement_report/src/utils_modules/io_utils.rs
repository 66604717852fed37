use crate::common::*;

pub const DEFAULT_HTML_TEMPLATE: &str = include_str!("../../html/movement_report_template.html");

#[doc = r#"
    TOML 형식의 설정 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    # Type Parameters
    * `T` - `DeserializeOwned` 트레이트를 구현한 구조체 타입

    # Arguments
    * `file_path` - 읽을 TOML 파일의 경로

    # Errors
    - 파일이 존재하지 않거나 읽기 권한이 없는 경우
    - TOML 형식이 잘못되어 파싱에 실패하는 경우
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = r#"
    메일 본문 HTML 템플릿을 반환한다.

    경로가 지정되면 해당 파일을 읽고, 없으면 바이너리에 포함된 기본 템플릿을 사용한다.
"#]
pub fn load_html_template(template_path: Option<&str>) -> anyhow::Result<String> {
    match template_path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            anyhow!(
                "[Error][load_html_template()] Failed to read template '{}': {:?}",
                path,
                e
            )
        }),
        None => Ok(DEFAULT_HTML_TEMPLATE.to_string()),
    }
}

#[doc = "파일을 읽어 base64 문자열로 반환 (인라인 첨부용)"]
pub async fn read_file_base64(file_path: &Path) -> anyhow::Result<String> {
    let bytes: Vec<u8> = tokio::fs::read(file_path).await.with_context(|| {
        format!(
            "[Error][read_file_base64()] Failed to read {}",
            file_path.display()
        )
    })?;

    Ok(BASE64_STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_has_every_placeholder() {
        let template = load_html_template(None).unwrap();
        for placeholder in [
            "{{LATEST_DATE}}",
            "{{SUMMARY_ROWS}}",
            "{{WINDOW_TOTAL}}",
            "{{CONTENT_ID}}",
            "{{PERIOD_START}}",
            "{{PERIOD_END}}",
            "{{GENERATED_AT}}",
        ] {
            assert!(template.contains(placeholder), "missing {}", placeholder);
        }
    }

    #[test]
    fn template_override_is_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.html");
        fs::write(&path, "<p>{{LATEST_DATE}}</p>").unwrap();

        let template = load_html_template(path.to_str()).unwrap();
        assert_eq!(template, "<p>{{LATEST_DATE}}</p>");

        assert!(load_html_template(Some("/nonexistent/template.html")).is_err());
    }

    #[tokio::test]
    async fn file_is_base64_encoded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        fs::write(&path, b"png").unwrap();

        assert_eq!(read_file_base64(&path).await.unwrap(), "cG5n");
    }
}
