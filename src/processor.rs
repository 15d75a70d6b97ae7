//! pass_data 파일 처리 모듈
//!
//! 디렉토리 트리 탐색과 개별 pass_data 파일의 읽기, 라인 단위 JSON 파싱을
//! 담당합니다.
//!
//! 파싱 실패 라인(불량 라인)은 진단 출력과 카운트 후 건너뛰며 실행을
//! 중단시키지 않습니다. 반면 파싱에 성공한 레코드의 필수 필드 누락은
//! 에러로 전파되어 전체 실행을 중단시킵니다.

use colored::Colorize;
use memmap2::Mmap;
use serde_json::Value;
use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{PaccumError, Result};
use crate::pattern::ResultFileMatcher;
use crate::record::{Record, Row};
use crate::stats::Statistics;

/// 대용량 파일 임계값 (이상이면 메모리 매핑 사용)
const MMAP_THRESHOLD: u64 = 10 * 1024 * 1024; // 10MB

/// 한 디렉토리에서 발견된 pass_data 파일 목록
#[derive(Debug)]
pub struct DirFiles {
    /// 디렉토리 경로
    pub dir: PathBuf,
    /// 디렉토리 바로 아래의 pass_data 파일 경로들 (탐색 순서)
    pub files: Vec<PathBuf>,
}

/// 루트 경로 아래의 모든 디렉토리를 재귀 탐색하여 pass_data 파일 수집
///
/// 디렉토리 방문 순서대로 `DirFiles`를 반환합니다. pass_data 파일이 없는
/// 디렉토리도 빈 목록으로 포함됩니다 (빈 Batch도 병합의 정상 단위).
/// 존재하지 않는 루트는 에러 없이 빈 결과를 반환합니다.
pub fn collect_result_files(root: &Path, matcher: &ResultFileMatcher) -> Vec<DirFiles> {
    let mut groups: Vec<DirFiles> = Vec::new();
    let mut index: HashMap<PathBuf, usize> = HashMap::new();

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();

        if entry.file_type().is_dir() {
            index.insert(path.to_path_buf(), groups.len());
            groups.push(DirFiles {
                dir: path.to_path_buf(),
                files: Vec::new(),
            });
        } else if entry.file_type().is_file() {
            let matched = path
                .file_name()
                .and_then(|s| s.to_str())
                .map(|s| matcher.matches(s))
                .unwrap_or(false);

            if matched {
                if let Some(&i) = path.parent().and_then(|p| index.get(p)) {
                    groups[i].files.push(path.to_path_buf());
                }
            }
        }
    }

    groups
}

/// 단일 pass_data 파일 처리
///
/// 파일 전체를 읽어 라인 단위로 JSON 파싱한 뒤, 각 레코드를 평탄화한
/// `Row` 목록을 반환합니다. 빈 라인은 건너뜁니다.
///
/// # Arguments
/// * `path` - 처리할 pass_data 파일 경로
/// * `stats` - 누적 카운터 (파싱 성공/불량 라인)
///
/// # Errors
/// 파일을 읽을 수 없거나, 파싱된 레코드에 필수 필드가 없으면 에러를
/// 반환합니다. 불량 라인은 에러가 아닙니다.
pub fn process_file(path: &Path, stats: &mut Statistics) -> Result<Vec<Row>> {
    let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    stats.add_bytes_read(file_size);

    let contents = read_contents(path, file_size)?;
    parse_lines(path, contents.as_str(), stats)
}

/// 읽어들인 파일 내용 (버퍼 또는 메모리 매핑)
enum FileContents {
    Buffered(String),
    Mapped(Mmap),
}

impl FileContents {
    fn as_str(&self) -> &str {
        match self {
            FileContents::Buffered(s) => s,
            // 읽기 시점에 UTF-8 검증을 마친 상태
            FileContents::Mapped(m) => std::str::from_utf8(m).unwrap_or_default(),
        }
    }
}

/// 파일 내용 읽기
///
/// 임계값 이상의 대용량 파일은 메모리 매핑으로, 그 외에는 일반 읽기로
/// 처리합니다. 두 경로 모두 반환 시점에는 파일 핸들이 닫혀 있거나
/// 매핑에 묶여 있습니다.
fn read_contents(path: &Path, file_size: u64) -> Result<FileContents> {
    if file_size >= MMAP_THRESHOLD {
        let file = File::open(path).map_err(|e| PaccumError::FileOpenError {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mmap = unsafe {
            Mmap::map(&file).map_err(|e| PaccumError::FileOpenError {
                file: path.to_path_buf(),
                reason: format!("메모리 매핑 실패: {}", e),
            })?
        };

        std::str::from_utf8(&mmap).map_err(|e| PaccumError::FileReadError {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(FileContents::Mapped(mmap))
    } else {
        let contents =
            std::fs::read_to_string(path).map_err(|e| PaccumError::FileReadError {
                file: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Ok(FileContents::Buffered(contents))
    }
}

/// 파일 내용을 라인 단위로 파싱하여 Row 목록 생성
fn parse_lines(path: &Path, contents: &str, stats: &mut Statistics) -> Result<Vec<Row>> {
    let mut rows = Vec::new();

    for line in contents.lines() {
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(line) {
            Ok(value) => {
                stats.record_parsed();
                let record = Record::from_value(value, path)?;
                rows.push(record.to_row());
            }
            Err(e) => {
                // 불량 라인: 파일 경로, 원본 라인, 파싱 에러를 출력하고 계속
                println!(
                    "  {} {:?} {} ({})",
                    "⚠️".bright_yellow(),
                    path,
                    line.dimmed(),
                    e.to_string().red()
                );
                stats.record_malformed();
            }
        }
    }

    Ok(rows)
}
