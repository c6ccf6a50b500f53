//! サイドベットのプールとオッズ・払い戻し計算

use chainchess_core::Color;
use serde::{Deserialize, Serialize};

use crate::eth::Wei;

/// 払い戻しに回る敗者プールの割合（%）。残りはコントラクトの手数料
pub const WINNER_POOL_SHARE_PCT: Wei = 95;

/// `getBettingInfo` が返す勝敗プール
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BettingPools {
    #[serde(with = "crate::eth::wei_string")]
    pub white_pool: Wei,
    #[serde(with = "crate::eth::wei_string")]
    pub black_pool: Wei,
}

impl BettingPools {
    pub fn new(white_pool: Wei, black_pool: Wei) -> BettingPools {
        BettingPools {
            white_pool,
            black_pool,
        }
    }

    /// プール総額
    #[inline]
    pub fn total(&self) -> Wei {
        self.white_pool + self.black_pool
    }

    /// 指定手番側のプール
    #[inline]
    pub fn pool_for(&self, side: Color) -> Wei {
        match side {
            Color::White => self.white_pool,
            Color::Black => self.black_pool,
        }
    }

    /// 指定手番側に賭けた場合のオッズ（敗者プール / 勝者プール）
    ///
    /// どちらかのプールが空の場合は 1.0（均衡）とする。
    pub fn odds_for(&self, side: Color) -> f64 {
        let own = self.pool_for(side);
        let opposite = self.pool_for(side.opponent());
        if own == 0 || opposite == 0 {
            return 1.0;
        }
        opposite as f64 / own as f64
    }

    /// 指定手番側が勝った場合の払い戻し額
    ///
    /// 賭け金の返還 + 敗者プールの95%を勝者プール内の持ち分比率で
    /// 按分した額（整数wei、切り捨て）。
    pub fn payout(&self, stake: Wei, side: Color) -> Wei {
        if stake == 0 {
            return 0;
        }
        let winning = self.pool_for(side);
        let losing = self.pool_for(side.opponent());
        if winning == 0 {
            return stake;
        }
        let share_pool = losing * WINNER_POOL_SHARE_PCT / 100;
        stake + share_pool * stake / winning
    }
}
