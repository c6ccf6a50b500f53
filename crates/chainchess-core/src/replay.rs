//! リプレイドライバ
//!
//! 棋譜（16bit move 列）を外部ルールエンジンへ順次適用し、任意の
//! 手数時点の局面を復元する。
//!
//! - `RulesEngine`: 「局面 + 指し手 → 新しい局面 or 不正手」という
//!   能力だけを要求する境界。本 crate はチェスのルールを持たず、
//!   準拠するライブラリなら何でも差し込める。
//! - `replay_to_ply` / `replay_all`: 初期局面からの fold。不正手に
//!   当たった時点で停止し、そこまでの局面と停止情報を返す。
//!
//! 各ステップの結果は {適用, 停止} の2状態で、一度停止した後は残りの
//! 入力を消費しない（再開もない）。オンチェーンの棋譜はコントラクト側で
//! 検証済みの前提なので、不正手は異常（デコードは全域だがチェスの
//! 合法性は全域でない、あるいは状態の desync）として扱い、致命的
//! エラーにはしない。
//!
//! リプレイは同期・純粋で、呼び出し間に状態を持たない。同じ入力は
//! 常に同じ結果を返す（エンジンが純粋である限り）。

use log::warn;

use crate::types::json::ReplaySummaryJson;
use crate::types::{DecodedMove, Move};

/// 外部ルールエンジンとの境界
///
/// 局面の表現はエンジン所有の opaque な型。本 crate は生成・適用・
/// 文字列化だけを依頼し、中身には触れない。
pub trait RulesEngine {
    /// エンジンが管理する局面型
    type Position;
    /// 不正手の報告に使うエラー型
    type Error: std::fmt::Display;

    /// 標準初期局面を生成する
    fn initial_position(&self) -> Self::Position;

    /// 指し手を局面へ適用する。不正手なら Err を返し、局面は変更しない
    fn apply_move(
        &self,
        position: &mut Self::Position,
        mv: DecodedMove,
    ) -> Result<(), Self::Error>;

    /// 局面を外部表現（FEN等）の文字列にする
    fn export_position(&self, position: &Self::Position) -> String;
}

/// リプレイが途中停止した位置とその理由
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayHalt {
    /// 適用できなかった指し手のインデックス
    pub ply: usize,
    /// 適用できなかった指し手
    pub mv: Move,
    /// エンジンが報告した理由
    pub reason: String,
}

/// リプレイ結果
///
/// `applied` が実際に適用できた指し手。`halted` が `None` なら棋譜全体
/// （指定 ply まで）の適用に成功している。呼び出し側は局面だけでなく
/// 「どこまで適用できたか」を区別できる。
#[derive(Debug)]
pub struct Replay<P> {
    /// 到達した局面
    pub position: P,
    /// 適用できた指し手（適用順）
    pub applied: Vec<Move>,
    /// 不正手で停止した場合の記録
    pub halted: Option<ReplayHalt>,
}

impl<P> Replay<P> {
    /// 最後に適用した指し手のインデックス（1手も適用していなければ -1）
    #[inline]
    pub fn last_ply(&self) -> i32 {
        (self.applied.len().min(i32::MAX as usize) as i32) - 1
    }

    /// 要求された範囲をすべて適用できたかどうか
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.halted.is_none()
    }

    /// 表示レイヤ向けのJSON要約を組み立てる
    pub fn summary<E>(&self, engine: &E) -> ReplaySummaryJson
    where
        E: RulesEngine<Position = P>,
    {
        ReplaySummaryJson {
            applied: self.applied.iter().map(|m| m.to_display()).collect(),
            last_ply: self.last_ply(),
            final_position: engine.export_position(&self.position),
            error: self.halted.as_ref().map(|h| h.reason.clone()),
        }
    }
}

/// 棋譜を先頭から `ply` 手目（0始まり、当該手を含む）まで適用する
///
/// - `ply < 0` は「1手も適用しない」の番兵で、初期局面をそのまま返す
/// - `ply` が棋譜長を超える場合は棋譜全体を適用する
/// - 不正手に当たったらそこで停止し、到達済みの局面を返す。スキップも
///   修復もしない
pub fn replay_to_ply<E: RulesEngine>(engine: &E, moves: &[u16], ply: i32) -> Replay<E::Position> {
    let mut position = engine.initial_position();
    let mut applied: Vec<Move> = Vec::new();
    let mut halted: Option<ReplayHalt> = None;

    if ply >= 0 {
        let count = moves.len().min(ply as usize + 1);
        for (i, &raw) in moves[..count].iter().enumerate() {
            let mv = Move::from_u16(raw);
            match engine.apply_move(&mut position, mv.decode()) {
                Ok(()) => applied.push(mv),
                Err(e) => {
                    warn!("illegal move at ply {i}: {} ({e})", mv.to_display());
                    halted = Some(ReplayHalt {
                        ply: i,
                        mv,
                        reason: e.to_string(),
                    });
                    break;
                }
            }
        }
    }

    Replay {
        position,
        applied,
        halted,
    }
}

/// 棋譜全体を適用する
pub fn replay_all<E: RulesEngine>(engine: &E, moves: &[u16]) -> Replay<E::Position> {
    let last = (moves.len().min(i32::MAX as usize) as i32) - 1;
    replay_to_ply(engine, moves, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// すべての指し手を受理する素通しエンジン。局面は適用済み指し手の列。
    struct PassThroughEngine;

    impl RulesEngine for PassThroughEngine {
        type Position = Vec<DecodedMove>;
        type Error = String;

        fn initial_position(&self) -> Self::Position {
            Vec::new()
        }

        fn apply_move(
            &self,
            position: &mut Self::Position,
            mv: DecodedMove,
        ) -> Result<(), Self::Error> {
            position.push(mv);
            Ok(())
        }

        fn export_position(&self, position: &Self::Position) -> String {
            format!("ply {}", position.len())
        }
    }

    // e2e4, e7e5, g1f3
    const MOVES: [u16; 3] = [1804, 2356, 1350];

    #[test]
    fn replay_empty_moves_returns_initial_position() {
        let engine = PassThroughEngine;
        let replay = replay_to_ply(&engine, &[], 10);
        assert!(replay.position.is_empty());
        assert!(replay.applied.is_empty());
        assert_eq!(replay.last_ply(), -1);
        assert!(replay.is_complete());
    }

    #[test]
    fn replay_negative_ply_is_no_move_sentinel() {
        let engine = PassThroughEngine;
        for ply in [-1, -2, i32::MIN] {
            let replay = replay_to_ply(&engine, &MOVES, ply);
            assert!(replay.position.is_empty());
            assert_eq!(replay.last_ply(), -1);
            assert!(replay.is_complete());
        }
    }

    #[test]
    fn replay_to_ply_applies_inclusive_prefix() {
        let engine = PassThroughEngine;
        let replay = replay_to_ply(&engine, &MOVES, 1);
        assert_eq!(replay.applied.len(), 2);
        assert_eq!(replay.position.len(), 2);
        assert_eq!(replay.last_ply(), 1);
    }

    #[test]
    fn replay_ply_past_end_applies_whole_game() {
        let engine = PassThroughEngine;
        let replay = replay_to_ply(&engine, &MOVES, 100);
        assert_eq!(replay.applied.len(), MOVES.len());
        assert!(replay.is_complete());
    }

    #[test]
    fn replay_all_equals_full_prefix() {
        let engine = PassThroughEngine;
        let all = replay_all(&engine, &MOVES);
        let prefix = replay_to_ply(&engine, &MOVES, MOVES.len() as i32 - 1);
        assert_eq!(all.position, prefix.position);
        assert_eq!(all.last_ply(), prefix.last_ply());
    }

    #[test]
    fn replay_summary_carries_applied_and_position() {
        let engine = PassThroughEngine;
        let replay = replay_all(&engine, &MOVES);
        let summary = replay.summary(&engine);
        assert_eq!(summary.applied, vec!["e2e4", "e7e5", "g1f3"]);
        assert_eq!(summary.last_ply, 2);
        assert_eq!(summary.final_position, "ply 3");
        assert_eq!(summary.error, None);
    }
}
