/// オンチェーン棋譜レコードの確認ツール
///
/// 使い方:
///   # getGame / getGameMoves の取得結果を束ねた JSON ファイルを渡す
///   inspect_record game_7.json
///
///   # JSON出力モード
///   inspect_record --json game_7.json
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::DateTime;
use clap::Parser;
use serde::Serialize;

use chainchess_record::{GameRecord, format_eth, history};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(about = "オンチェーン棋譜レコードの確認")]
struct Cli {
    /// レコードのJSONファイルパス
    file: PathBuf,

    /// JSON出力モード
    #[arg(long)]
    json: bool,
}

// ---------------------------------------------------------------------------
// JSON出力用の構造体（シリアライズのみ）
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct InspectJson {
    game_id: u64,
    status: String,
    white: String,
    black: String,
    pot_eth: String,
    stake_multiplier: u64,
    cost_per_move_eth: String,
    moves_played: usize,
    side_to_move: Option<String>,
    last_move_time: Option<String>,
    history: Vec<String>,
}

fn format_timestamp(secs: u64) -> Option<String> {
    if secs == 0 {
        return None;
    }
    let dt = DateTime::from_timestamp(secs as i64, 0)?;
    Some(dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let raw = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let record = GameRecord::from_json(&raw)
        .with_context(|| format!("invalid game record in {}", cli.file.display()))?;
    if !record.meta.exists() {
        bail!("game {} does not exist (status is None)", record.game_id);
    }

    let history = history::history_lines(&record.moves);
    let side_to_move = record.side_to_move().map(|c| c.label().to_string());

    if cli.json {
        let out = InspectJson {
            game_id: record.game_id,
            status: record.meta.status.label().to_string(),
            white: record.meta.white.to_string(),
            black: record.meta.black.to_string(),
            pot_eth: format_eth(record.meta.pot, 6),
            stake_multiplier: record.meta.stake_multiplier,
            cost_per_move_eth: format_eth(record.meta.cost_per_move(), 6),
            moves_played: record.moves.len(),
            side_to_move,
            last_move_time: format_timestamp(record.meta.last_move_time),
            history,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Game #{}", record.game_id);
    println!("  status:          {}", record.meta.status);
    println!("  white:           {}", record.meta.white.short());
    println!("  black:           {}", record.meta.black.short());
    println!("  pot:             {} ETH", format_eth(record.meta.pot, 6));
    println!("  stake:           {}x", record.meta.stake_multiplier);
    println!(
        "  cost per move:   {} ETH",
        format_eth(record.meta.cost_per_move(), 6)
    );
    println!("  moves played:    {}", record.moves.len());
    if let Some(side) = side_to_move {
        println!("  side to move:    {side}");
    }
    if let Some(ts) = format_timestamp(record.meta.last_move_time) {
        println!("  last move:       {ts}");
    }

    println!();
    if history.is_empty() {
        println!("No moves yet");
    } else {
        for line in &history {
            println!("  {line}");
        }
    }

    Ok(())
}
