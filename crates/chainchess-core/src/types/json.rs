use serde::{Deserialize, Serialize};

/// リプレイ結果のJSON表現
///
/// 表示レイヤ（盤面ウィジェットやCLI）へ渡す要約。局面そのものは
/// ルールエンジン所有の opaque な値なので、エンジンが出力した
/// 文字列表現（FEN等）だけを持つ。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplaySummaryJson {
    /// 適用できた指し手（表示形式）
    pub applied: Vec<String>,
    /// 最後に適用した指し手のインデックス（1手も適用していなければ -1）
    #[serde(rename = "last_ply")]
    pub last_ply: i32,
    /// ルールエンジンが出力した局面文字列
    pub final_position: String,
    /// 途中停止した場合の理由
    pub error: Option<String>,
}
