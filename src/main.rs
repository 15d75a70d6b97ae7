//! paccum - PASS DATA ACCUMULATOR
//!
//! 메인 엔트리포인트

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use paccum::{
    cli::Args,
    pattern::{ResultFileMatcher, RESULT_FILE_PATTERN},
    processor::{collect_result_files, process_file},
    stats::Statistics,
    table::{Batch, Table},
};

/// 결과 테이블 출력 파일 이름 (현재 작업 디렉토리에 생성)
const OUTPUT_FILE: &str = "data.csv";

fn main() -> Result<()> {
    let args = Args::parse();

    // 헤더 출력
    print_header(&args);

    // 파일 이름 매처 초기화
    let matcher = ResultFileMatcher::new().map_err(|e| anyhow::anyhow!("{}", e))?;

    // pass_data 파일 수집 (디렉토리 단위, 존재하지 않는 루트는 빈 탐색)
    println!("\n{}", "📁 파일 검색 중...".bright_cyan());
    let groups = collect_result_files(&args.root, &matcher);
    let total_files: usize = groups.iter().map(|g| g.files.len()).sum();

    if total_files == 0 {
        println!("{}", "⚠️ 처리할 pass_data 파일이 없습니다.".yellow());
    } else {
        println!(
            "  {} 발견된 파일 수: {}",
            "📋".bright_white(),
            total_files.to_string().bright_green()
        );
    }

    // 통계 초기화
    let mut stats = Statistics::new(total_files);

    // 디렉토리 단위 순차 처리
    println!("\n{}", "⚡ 레코드 수집 중...".bright_cyan());
    let pb = create_progress_bar(total_files);

    let mut batches: Vec<Batch> = Vec::with_capacity(groups.len());
    for group in &groups {
        let mut batch = Batch::new();
        for file in &group.files {
            let rows = process_file(file, &mut stats)?;
            batch.extend(rows);
            pb.inc(1);
        }
        batches.push(batch);
        stats.print_progress();
    }

    pb.finish_with_message("완료!");

    // Batch 병합 및 CSV 저장
    println!("\n{}", "💾 CSV 파일 저장 중...".bright_cyan());

    let table = Table::combine(batches);
    let bytes_written = table.write_csv(Path::new(OUTPUT_FILE))?;
    stats.add_bytes_written(bytes_written);

    // 통계 출력
    stats.print_summary();

    println!(
        "\n{} 저장 완료: {} ({} 행, {} 열)\n",
        "✅".bright_green(),
        OUTPUT_FILE,
        table.row_count(),
        table.columns().len()
    );

    Ok(())
}

/// 헤더 출력
fn print_header(args: &Args) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!("{}", " 🚀 PASS DATA ACCUMULATOR".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} 입력 루트: {:?}", "📂".bright_cyan(), args.root);
    println!("  {} 출력 파일: {}", "📄".bright_green(), OUTPUT_FILE);
    println!(
        "  {} 파일 패턴: {}",
        "🔍".bright_magenta(),
        RESULT_FILE_PATTERN
    );
    println!("{}", "═".repeat(50).bright_blue());
}

/// 진행률 바 생성
fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb
}
