//! 테이블 병합 모듈
//!
//! 디렉토리 단위 Batch를 모아 하나의 최종 테이블로 병합하고 CSV로
//! 직렬화하는 것을 담당합니다.

use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

use crate::error::{PaccumError, Result};
use crate::record::Row;

/// 한 디렉토리에서 수집된 Row 묶음
#[derive(Debug, Default)]
pub struct Batch {
    rows: Vec<Row>,
}

impl Batch {
    /// 빈 Batch 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// Row 하나 추가
    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Row 여러 개 추가 (파싱 순서 유지)
    pub fn extend(&mut self, rows: impl IntoIterator<Item = Row>) {
        self.rows.extend(rows);
    }

    /// Row 수 반환
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// 비어 있는지 확인
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row 목록 참조
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Batch 내 컬럼 합집합 (처음 등장한 순서)
    pub fn columns(&self) -> Vec<String> {
        let mut columns = Vec::new();
        let mut seen = HashSet::new();

        for row in &self.rows {
            for key in row.keys() {
                if seen.insert(key.clone()) {
                    columns.push(key.clone());
                }
            }
        }

        columns
    }
}

/// 모든 Batch를 병합한 최종 테이블
#[derive(Debug, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<(usize, Row)>,
}

impl Table {
    /// Batch들을 컬럼 이름 기준 outer 정렬로 병합
    ///
    /// 컬럼 순서는 전체 Batch에서 처음 등장한 순서, 행 순서는 Batch 순서와
    /// Batch 내 파싱 순서를 따릅니다. 일부 Batch에만 있는 컬럼은 다른
    /// Batch의 행에서 빈 셀이 됩니다. 행 인덱스는 Batch마다 0부터 다시
    /// 시작합니다. 빈 Batch는 행을 추가하지 않지만 정상적인 병합 단위입니다.
    pub fn combine(batches: Vec<Batch>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for batch in &batches {
            for column in batch.columns() {
                if seen.insert(column.clone()) {
                    columns.push(column);
                }
            }
        }

        let mut rows = Vec::new();
        for batch in batches {
            for (index, row) in batch.rows.into_iter().enumerate() {
                rows.push((index, row));
            }
        }

        Self { columns, rows }
    }

    /// 컬럼 이름 목록 반환
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// 행 수 반환
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 테이블이 완전히 비어 있는지 확인 (행도 컬럼도 없음)
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_empty()
    }

    /// 테이블을 CSV로 직렬화하여 `path`에 기록
    ///
    /// 기존 파일은 덮어씁니다. 첫 행은 이름 없는 인덱스 컬럼으로 시작하는
    /// 헤더이며, 각 행은 인덱스 + 컬럼 순서대로의 셀 값입니다. 완전히 빈
    /// 테이블은 빈 파일을 생성합니다.
    ///
    /// # Returns
    /// 기록된 바이트 수
    pub fn write_csv(&self, path: &Path) -> Result<u64> {
        let write_error = |e: &dyn std::fmt::Display| PaccumError::WriteError {
            reason: e.to_string(),
        };

        let mut writer = csv::Writer::from_path(path).map_err(|e| write_error(&e))?;

        if !self.is_empty() {
            let mut header = Vec::with_capacity(self.columns.len() + 1);
            header.push(String::new());
            header.extend(self.columns.iter().cloned());
            writer.write_record(&header).map_err(|e| write_error(&e))?;

            for (index, row) in &self.rows {
                let mut record = Vec::with_capacity(self.columns.len() + 1);
                record.push(index.to_string());
                for column in &self.columns {
                    record.push(row.get(column).map(render_cell).unwrap_or_default());
                }
                writer.write_record(&record).map_err(|e| write_error(&e))?;
            }
        }

        writer.flush().map_err(|e| write_error(&e))?;
        drop(writer);

        Ok(std::fs::metadata(path).map(|m| m.len()).unwrap_or(0))
    }
}

/// JSON 값을 CSV 셀 문자열로 변환
///
/// null과 누락 셀은 빈 문자열, 배열/객체는 압축 JSON 표현이 됩니다.
pub fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => panic!("row fixture must be an object"),
        }
    }

    #[test]
    fn test_batch_columns_first_seen_order() {
        let mut batch = Batch::new();
        assert!(batch.is_empty());

        batch.push(row(json!({"a": 1, "b": 2})));
        batch.push(row(json!({"b": 3, "c": 4})));

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.rows()[0].get("a"), Some(&json!(1)));
        assert_eq!(batch.columns(), ["a", "b", "c"]);
    }

    #[test]
    fn test_combine_column_union() {
        let mut a = Batch::new();
        a.push(row(json!({"x": 1, "y": 2})));
        let mut b = Batch::new();
        b.push(row(json!({"y": 3, "z": 4})));

        let table = Table::combine(vec![a, b]);

        assert_eq!(table.columns(), ["x", "y", "z"]);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_combine_empty_batch_is_legal() {
        let mut a = Batch::new();
        a.push(row(json!({"x": 1})));

        let table = Table::combine(vec![Batch::new(), a, Batch::new()]);

        assert_eq!(table.columns(), ["x"]);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_write_csv_missing_cells_are_empty() {
        let mut a = Batch::new();
        a.push(row(json!({"x": 1, "y": 2})));
        let mut b = Batch::new();
        b.push(row(json!({"y": 3, "z": 4})));

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");
        Table::combine(vec![a, b]).write_csv(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, ",x,y,z\n0,1,2,\n0,,3,4\n");
    }

    #[test]
    fn test_write_csv_index_restarts_per_batch() {
        let mut a = Batch::new();
        a.push(row(json!({"x": 1})));
        a.push(row(json!({"x": 2})));
        let mut b = Batch::new();
        b.push(row(json!({"x": 3})));

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");
        Table::combine(vec![a, b]).write_csv(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, ",x\n0,1\n1,2\n0,3\n");
    }

    #[test]
    fn test_write_csv_empty_table() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");

        let bytes = Table::combine(Vec::new()).write_csv(&path).unwrap();

        assert_eq!(bytes, 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_csv_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");
        fs::write(&path, "stale contents").unwrap();

        let mut batch = Batch::new();
        batch.push(row(json!({"a": 1})));
        Table::combine(vec![batch]).write_csv(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, ",a\n0,1\n");
    }

    #[test]
    fn test_render_cell() {
        assert_eq!(render_cell(&json!(null)), "");
        assert_eq!(render_cell(&json!(true)), "true");
        assert_eq!(render_cell(&json!(1.5)), "1.5");
        assert_eq!(render_cell(&json!("text")), "text");
        assert_eq!(render_cell(&json!([1, 2])), "[1,2]");
    }
}
