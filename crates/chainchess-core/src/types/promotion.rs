//! 昇格先の駒種（Promotion）

/// ポーン昇格先の駒種
///
/// move encoding の bit 12-15 に対応する。コード0は「昇格なし」で
/// `Option<Promotion>` の `None` として表現する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Promotion {
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
}

impl Promotion {
    /// 全ての昇格先
    pub const ALL: [Promotion; 4] =
        [Promotion::Knight, Promotion::Bishop, Promotion::Rook, Promotion::Queen];

    /// エンコード値（1-4）からの変換
    ///
    /// 0 は昇格なし、5-15 は未定義コードで、いずれも `None` を返す。
    /// エンコード側が不正値を拒否しない（デコードは全域）ため、
    /// 未定義コードをエラーにはしない。
    #[inline]
    pub const fn from_code(code: u8) -> Option<Promotion> {
        match code {
            1 => Some(Promotion::Knight),
            2 => Some(Promotion::Bishop),
            3 => Some(Promotion::Rook),
            4 => Some(Promotion::Queen),
            _ => None,
        }
    }

    /// エンコード値を取得
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// 小文字1文字（'n' | 'b' | 'r' | 'q'）に変換
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Promotion::Knight => 'n',
            Promotion::Bishop => 'b',
            Promotion::Rook => 'r',
            Promotion::Queen => 'q',
        }
    }

    /// 表示用の大文字1文字（'N' | 'B' | 'R' | 'Q'）に変換
    #[inline]
    pub const fn to_char_upper(self) -> char {
        (self.to_char() as u8).to_ascii_uppercase() as char
    }

    /// 1文字からの変換（大文字小文字どちらも受け付ける）
    #[inline]
    pub const fn from_char(c: char) -> Option<Promotion> {
        match c {
            'n' | 'N' => Some(Promotion::Knight),
            'b' | 'B' => Some(Promotion::Bishop),
            'r' | 'R' => Some(Promotion::Rook),
            'q' | 'Q' => Some(Promotion::Queen),
            _ => None,
        }
    }
}
