//! 手番号付きの棋譜リスト整形

use chainchess_core::Move;

/// 1手分の表示行（白番 "1. e2e4" / 黒番 "1... e7e5"）
pub fn history_line(ply: usize, mv: Move) -> String {
    let number = ply / 2 + 1;
    if ply % 2 == 0 {
        format!("{number}. {}", mv.to_display())
    } else {
        format!("{number}... {}", mv.to_display())
    }
}

/// 棋譜全体を表示行の列にする
pub fn history_lines(moves: &[u16]) -> Vec<String> {
    moves
        .iter()
        .enumerate()
        .map(|(ply, &raw)| history_line(ply, Move::from_u16(raw)))
        .collect()
}
