//! Cell sets backed by a single 64-bit word.
//!
//! Bit `i` stands for the cell at row-major index `i` (`row * width + col`),
//! so boards are limited to 64 cells.

use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// A set of cell indices on a board of at most 64 cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellSet(pub u64);

impl CellSet {
    pub const EMPTY: CellSet = CellSet(0);

    /// Every index below `len` set.
    #[inline(always)]
    pub const fn full(len: u32) -> Self {
        if len >= 64 {
            CellSet(!0)
        } else {
            CellSet((1u64 << len) - 1)
        }
    }

    #[inline(always)]
    pub const fn from_index(idx: u8) -> Self {
        CellSet(1u64 << idx)
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn contains(self, idx: u8) -> bool {
        (self.0 & (1u64 << idx)) != 0
    }

    #[inline(always)]
    pub fn set(&mut self, idx: u8) {
        self.0 |= 1u64 << idx;
    }

    #[inline(always)]
    pub fn clear(&mut self, idx: u8) {
        self.0 &= !(1u64 << idx);
    }

    #[inline(always)]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Get and remove the lowest index.
    #[inline(always)]
    pub fn pop_lsb(&mut self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            let idx = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Some(idx)
        }
    }
}

impl BitAnd for CellSet {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        CellSet(self.0 & rhs.0)
    }
}

impl BitOr for CellSet {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        CellSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for CellSet {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Not for CellSet {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self::Output {
        CellSet(!self.0)
    }
}

/// Yields indices in ascending order.
impl Iterator for CellSet {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pop_lsb()
    }
}

#[cfg(test)]
#[path = "bitboard_tests.rs"]
mod bitboard_tests;
