//! 레코드 모듈
//!
//! 한 라인에서 파싱된 패스 실행 레코드의 타입 정의와 평탄화를 담당합니다.
//!
//! 중첩된 JSON을 그대로 들고 다니는 대신, 파싱 시점에 필수 필드를 검증한
//! `Record` 타입으로 변환합니다. 필수 필드 누락은 조용히 기본값으로 채우지
//! 않고 어떤 키가 없는지 명시한 에러로 즉시 실패합니다.

use serde_json::{Map, Value};
use std::path::Path;

use crate::error::{PaccumError, Result};

/// 평탄화된 테이블 행
///
/// 피처 매핑에 `pass`, `name`, `modified` 키가 병합된 형태입니다.
/// 키 순서는 삽입 순서를 유지합니다.
pub type Row = Map<String, Value>;

/// 패스 실행 한 건의 파싱된 레코드
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// IR 식별자 (`IR_name`)
    pub ir_name: Value,
    /// 패스가 IR을 수정했는지 여부 (`modified`)
    pub modified: Value,
    /// 레코드를 생성한 컴파일러 패스 식별자 (`input.pass`)
    pub pass: Value,
    /// 피처 이름 → 값 매핑 (`input.feature`)
    pub features: Map<String, Value>,
    /// 선행 패스 이력 (`input.pass_history`, 선택 필드)
    pub pass_history: Option<Value>,
}

impl Record {
    /// 파싱된 JSON 값을 검증하여 `Record`로 변환
    ///
    /// # Arguments
    /// * `value` - 한 라인에서 파싱된 JSON 값
    /// * `file` - 에러 메시지에 사용할 원본 파일 경로
    ///
    /// # Errors
    /// 값이 객체가 아니거나, `IR_name`, `modified`, `input`, `input.pass`,
    /// `input.feature` 중 하나라도 없으면 누락된 키 이름을 담은 에러를
    /// 반환합니다.
    pub fn from_value(value: Value, file: &Path) -> Result<Self> {
        let missing = |field: &str| PaccumError::MissingField {
            file: file.to_path_buf(),
            field: field.to_string(),
        };

        let mut obj = match value {
            Value::Object(map) => map,
            _ => {
                return Err(PaccumError::RecordNotObject {
                    file: file.to_path_buf(),
                })
            }
        };

        let ir_name = obj.remove("IR_name").ok_or_else(|| missing("IR_name"))?;
        let modified = obj.remove("modified").ok_or_else(|| missing("modified"))?;

        let mut input = match obj.remove("input") {
            Some(Value::Object(map)) => map,
            Some(_) => {
                return Err(PaccumError::FieldNotObject {
                    file: file.to_path_buf(),
                    field: "input".to_string(),
                })
            }
            None => return Err(missing("input")),
        };

        let pass = input.remove("pass").ok_or_else(|| missing("input.pass"))?;

        let features = match input.remove("feature") {
            Some(Value::Object(map)) => map,
            Some(_) => {
                return Err(PaccumError::FieldNotObject {
                    file: file.to_path_buf(),
                    field: "input.feature".to_string(),
                })
            }
            None => return Err(missing("input.feature")),
        };

        let pass_history = input.remove("pass_history");

        Ok(Self {
            ir_name,
            modified,
            pass,
            features,
            pass_history,
        })
    }

    /// 레코드를 평탄화하여 `Row`로 변환
    ///
    /// 피처 매핑의 키들을 원래 순서대로 유지한 뒤 `pass`, `name`,
    /// `modified`를 병합한 새 매핑을 반환합니다. 순수 함수이며 같은
    /// 레코드에 대해 항상 같은 `Row`를 반환합니다.
    pub fn to_row(&self) -> Row {
        let mut row = self.features.clone();
        row.insert("pass".to_string(), self.pass.clone());
        row.insert("name".to_string(), self.ir_name.clone());
        row.insert("modified".to_string(), self.modified.clone());
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn sample_value() -> Value {
        json!({
            "IR_name": "f1",
            "modified": true,
            "input": {
                "feature": {"a": 1, "b": 2.5},
                "pass": "p1",
                "pass_history": ["p0"]
            }
        })
    }

    #[test]
    fn test_from_value_success() {
        let record = Record::from_value(sample_value(), &PathBuf::from("pass_data_0")).unwrap();
        assert_eq!(record.ir_name, json!("f1"));
        assert_eq!(record.modified, json!(true));
        assert_eq!(record.pass, json!("p1"));
        assert_eq!(record.features.get("a"), Some(&json!(1)));
        assert_eq!(record.pass_history, Some(json!(["p0"])));
    }

    #[test]
    fn test_from_value_missing_ir_name() {
        let value = json!({
            "modified": true,
            "input": {"feature": {"a": 1}, "pass": "p1"}
        });
        let err = Record::from_value(value, &PathBuf::from("pass_data_0")).unwrap_err();
        assert!(err.to_string().contains("IR_name"));
    }

    #[test]
    fn test_from_value_missing_feature() {
        let value = json!({
            "IR_name": "f1",
            "modified": false,
            "input": {"pass": "p1"}
        });
        let err = Record::from_value(value, &PathBuf::from("pass_data_0")).unwrap_err();
        assert!(err.to_string().contains("input.feature"));
    }

    #[test]
    fn test_from_value_not_an_object() {
        let err = Record::from_value(json!(42), &PathBuf::from("pass_data_0")).unwrap_err();
        assert!(err.to_string().contains("JSON 객체가 아닙니다"));
    }

    #[test]
    fn test_to_row_contents_and_order() {
        let record = Record::from_value(sample_value(), &PathBuf::from("pass_data_0")).unwrap();
        let row = record.to_row();

        let keys: Vec<&String> = row.keys().collect();
        assert_eq!(keys, ["a", "b", "pass", "name", "modified"]);
        assert_eq!(row.get("a"), Some(&json!(1)));
        assert_eq!(row.get("b"), Some(&json!(2.5)));
        assert_eq!(row.get("pass"), Some(&json!("p1")));
        assert_eq!(row.get("name"), Some(&json!("f1")));
        assert_eq!(row.get("modified"), Some(&json!(true)));
    }

    #[test]
    fn test_to_row_idempotent() {
        let record = Record::from_value(sample_value(), &PathBuf::from("pass_data_0")).unwrap();
        assert_eq!(record.to_row(), record.to_row());
    }
}
