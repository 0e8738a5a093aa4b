//! Memory operand access sizes.

/// Size and element layout of a memory access.
///
/// `Packed*` kinds describe a whole vector in memory; `Broadcast*` kinds
/// describe a single element that an EVEX instruction replicates across the
/// destination vector.
#[allow(non_camel_case_types)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::EnumCount,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MemorySize {
    /// No memory operand, or an access whose size is not architecturally fixed
    #[default]
    Unknown,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    UInt128,
    UInt256,
    UInt512,
    Int8,
    Int16,
    Int32,
    Int64,
    /// Far pointer with a 16-bit offset
    SegPtr16,
    /// Far pointer with a 32-bit offset
    SegPtr32,
    /// Far pointer with a 64-bit offset
    SegPtr64,
    /// Near pointer with a 16-bit offset
    WordOffset,
    DwordOffset,
    QwordOffset,
    /// Pair of signed 16-bit bounds
    Bound16_WordWord,
    /// Pair of signed 32-bit bounds
    Bound32_DwordDword,
    /// Descriptor table pointer (16-bit limit, 32-bit base)
    Fword6,
    /// Descriptor table pointer (16-bit limit, 64-bit base)
    Fword10,
    Float32,
    Float64,
    /// x87 extended precision value
    Float80,
    Float128,
    /// Packed BCD integer
    Bcd,
    /// x87 environment, 16-bit layout
    FpuEnv14,
    FpuEnv28,
    /// x87 state, 16-bit layout
    FpuState94,
    FpuState108,
    /// `FXSAVE` area
    Fxsave512,
    /// `XSAVE` area; its size depends on the enabled state components
    Xsave,

    Packed16_Int8,
    Packed16_UInt8,

    Packed32_Int8,
    Packed32_UInt8,
    Packed32_Int16,
    Packed32_UInt16,

    Packed64_Int8,
    Packed64_UInt8,
    Packed64_Int16,
    Packed64_UInt16,
    Packed64_Int32,
    Packed64_UInt32,
    Packed64_Float32,

    Packed128_Int8,
    Packed128_UInt8,
    Packed128_Int16,
    Packed128_UInt16,
    Packed128_Int32,
    Packed128_UInt32,
    Packed128_Int64,
    Packed128_UInt64,
    Packed128_Float32,
    Packed128_Float64,

    Packed256_Int8,
    Packed256_UInt8,
    Packed256_Int16,
    Packed256_UInt16,
    Packed256_Int32,
    Packed256_UInt32,
    Packed256_Int64,
    Packed256_UInt64,
    Packed256_Float32,
    Packed256_Float64,

    Packed512_Int8,
    Packed512_UInt8,
    Packed512_Int16,
    Packed512_UInt16,
    Packed512_Int32,
    Packed512_UInt32,
    Packed512_Int64,
    Packed512_UInt64,
    Packed512_Float32,
    Packed512_Float64,

    Broadcast128_Int32,
    Broadcast128_UInt32,
    Broadcast128_Int64,
    Broadcast128_UInt64,
    Broadcast128_Float32,
    Broadcast128_Float64,

    Broadcast256_Int32,
    Broadcast256_UInt32,
    Broadcast256_Int64,
    Broadcast256_UInt64,
    Broadcast256_Float32,
    Broadcast256_Float64,

    Broadcast512_Int32,
    Broadcast512_UInt32,
    Broadcast512_Int64,
    Broadcast512_UInt64,
    Broadcast512_Float32,
    Broadcast512_Float64,
}

impl MemorySize {
    /// Returns the number of bytes accessed.
    ///
    /// Broadcast kinds return the size of the single element that is read.
    pub const fn size(self) -> usize {
        match self {
            Self::Unknown | Self::Xsave => 0,
            Self::UInt8 | Self::Int8 => 1,
            Self::UInt16
            | Self::Int16
            | Self::WordOffset
            | Self::Packed16_Int8
            | Self::Packed16_UInt8 => 2,
            Self::UInt32
            | Self::Int32
            | Self::SegPtr16
            | Self::DwordOffset
            | Self::Bound16_WordWord
            | Self::Float32
            | Self::Packed32_Int8
            | Self::Packed32_UInt8
            | Self::Packed32_Int16
            | Self::Packed32_UInt16
            | Self::Broadcast128_Int32
            | Self::Broadcast128_UInt32
            | Self::Broadcast128_Float32
            | Self::Broadcast256_Int32
            | Self::Broadcast256_UInt32
            | Self::Broadcast256_Float32
            | Self::Broadcast512_Int32
            | Self::Broadcast512_UInt32
            | Self::Broadcast512_Float32 => 4,
            Self::SegPtr32 | Self::Fword6 => 6,
            Self::UInt64
            | Self::Int64
            | Self::QwordOffset
            | Self::Bound32_DwordDword
            | Self::Float64
            | Self::Packed64_Int8
            | Self::Packed64_UInt8
            | Self::Packed64_Int16
            | Self::Packed64_UInt16
            | Self::Packed64_Int32
            | Self::Packed64_UInt32
            | Self::Packed64_Float32
            | Self::Broadcast128_Int64
            | Self::Broadcast128_UInt64
            | Self::Broadcast128_Float64
            | Self::Broadcast256_Int64
            | Self::Broadcast256_UInt64
            | Self::Broadcast256_Float64
            | Self::Broadcast512_Int64
            | Self::Broadcast512_UInt64
            | Self::Broadcast512_Float64 => 8,
            Self::SegPtr64 | Self::Fword10 | Self::Float80 | Self::Bcd => 10,
            Self::FpuEnv14 => 14,
            Self::UInt128
            | Self::Float128
            | Self::Packed128_Int8
            | Self::Packed128_UInt8
            | Self::Packed128_Int16
            | Self::Packed128_UInt16
            | Self::Packed128_Int32
            | Self::Packed128_UInt32
            | Self::Packed128_Int64
            | Self::Packed128_UInt64
            | Self::Packed128_Float32
            | Self::Packed128_Float64 => 16,
            Self::FpuEnv28 => 28,
            Self::UInt256
            | Self::Packed256_Int8
            | Self::Packed256_UInt8
            | Self::Packed256_Int16
            | Self::Packed256_UInt16
            | Self::Packed256_Int32
            | Self::Packed256_UInt32
            | Self::Packed256_Int64
            | Self::Packed256_UInt64
            | Self::Packed256_Float32
            | Self::Packed256_Float64 => 32,
            Self::UInt512
            | Self::Packed512_Int8
            | Self::Packed512_UInt8
            | Self::Packed512_Int16
            | Self::Packed512_UInt16
            | Self::Packed512_Int32
            | Self::Packed512_UInt32
            | Self::Packed512_Int64
            | Self::Packed512_UInt64
            | Self::Packed512_Float32
            | Self::Packed512_Float64 => 64,
            Self::FpuState94 => 94,
            Self::FpuState108 => 108,
            Self::Fxsave512 => 512,
        }
    }

    /// Returns the size of one element: the whole access for scalar kinds,
    /// the lane size for packed and broadcast kinds.
    pub const fn element_size(self) -> usize {
        match self {
            Self::Packed16_Int8
            | Self::Packed16_UInt8
            | Self::Packed32_Int8
            | Self::Packed32_UInt8
            | Self::Packed64_Int8
            | Self::Packed64_UInt8
            | Self::Packed128_Int8
            | Self::Packed128_UInt8
            | Self::Packed256_Int8
            | Self::Packed256_UInt8
            | Self::Packed512_Int8
            | Self::Packed512_UInt8 => 1,
            Self::Packed32_Int16
            | Self::Packed32_UInt16
            | Self::Packed64_Int16
            | Self::Packed64_UInt16
            | Self::Packed128_Int16
            | Self::Packed128_UInt16
            | Self::Packed256_Int16
            | Self::Packed256_UInt16
            | Self::Packed512_Int16
            | Self::Packed512_UInt16 => 2,
            Self::Packed64_Int32
            | Self::Packed64_UInt32
            | Self::Packed64_Float32
            | Self::Packed128_Int32
            | Self::Packed128_UInt32
            | Self::Packed128_Float32
            | Self::Packed256_Int32
            | Self::Packed256_UInt32
            | Self::Packed256_Float32
            | Self::Packed512_Int32
            | Self::Packed512_UInt32
            | Self::Packed512_Float32
            | Self::Broadcast128_Int32
            | Self::Broadcast128_UInt32
            | Self::Broadcast128_Float32
            | Self::Broadcast256_Int32
            | Self::Broadcast256_UInt32
            | Self::Broadcast256_Float32
            | Self::Broadcast512_Int32
            | Self::Broadcast512_UInt32
            | Self::Broadcast512_Float32 => 4,
            Self::Packed128_Int64
            | Self::Packed128_UInt64
            | Self::Packed128_Float64
            | Self::Packed256_Int64
            | Self::Packed256_UInt64
            | Self::Packed256_Float64
            | Self::Packed512_Int64
            | Self::Packed512_UInt64
            | Self::Packed512_Float64
            | Self::Broadcast128_Int64
            | Self::Broadcast128_UInt64
            | Self::Broadcast128_Float64
            | Self::Broadcast256_Int64
            | Self::Broadcast256_UInt64
            | Self::Broadcast256_Float64
            | Self::Broadcast512_Int64
            | Self::Broadcast512_UInt64
            | Self::Broadcast512_Float64 => 8,
            other => other.size(),
        }
    }

    /// Returns the full vector width covered by a broadcast kind, or the
    /// access size for everything else.
    pub const fn vector_size(self) -> usize {
        match self {
            Self::Broadcast128_Int32
            | Self::Broadcast128_UInt32
            | Self::Broadcast128_Int64
            | Self::Broadcast128_UInt64
            | Self::Broadcast128_Float32
            | Self::Broadcast128_Float64 => 16,
            Self::Broadcast256_Int32
            | Self::Broadcast256_UInt32
            | Self::Broadcast256_Int64
            | Self::Broadcast256_UInt64
            | Self::Broadcast256_Float32
            | Self::Broadcast256_Float64 => 32,
            Self::Broadcast512_Int32
            | Self::Broadcast512_UInt32
            | Self::Broadcast512_Int64
            | Self::Broadcast512_UInt64
            | Self::Broadcast512_Float32
            | Self::Broadcast512_Float64 => 64,
            other => other.size(),
        }
    }

    /// Returns true for EVEX embedded-broadcast kinds.
    pub const fn is_broadcast(self) -> bool {
        matches!(
            self,
            Self::Broadcast128_Int32
                | Self::Broadcast128_UInt32
                | Self::Broadcast128_Int64
                | Self::Broadcast128_UInt64
                | Self::Broadcast128_Float32
                | Self::Broadcast128_Float64
                | Self::Broadcast256_Int32
                | Self::Broadcast256_UInt32
                | Self::Broadcast256_Int64
                | Self::Broadcast256_UInt64
                | Self::Broadcast256_Float32
                | Self::Broadcast256_Float64
                | Self::Broadcast512_Int32
                | Self::Broadcast512_UInt32
                | Self::Broadcast512_Int64
                | Self::Broadcast512_UInt64
                | Self::Broadcast512_Float32
                | Self::Broadcast512_Float64
        )
    }

    /// Returns true for packed vector kinds.
    pub const fn is_packed(self) -> bool {
        matches!(
            self,
            Self::Packed16_Int8
                | Self::Packed16_UInt8
                | Self::Packed32_Int8
                | Self::Packed32_UInt8
                | Self::Packed32_Int16
                | Self::Packed32_UInt16
                | Self::Packed64_Int8
                | Self::Packed64_UInt8
                | Self::Packed64_Int16
                | Self::Packed64_UInt16
                | Self::Packed64_Int32
                | Self::Packed64_UInt32
                | Self::Packed64_Float32
                | Self::Packed128_Int8
                | Self::Packed128_UInt8
                | Self::Packed128_Int16
                | Self::Packed128_UInt16
                | Self::Packed128_Int32
                | Self::Packed128_UInt32
                | Self::Packed128_Int64
                | Self::Packed128_UInt64
                | Self::Packed128_Float32
                | Self::Packed128_Float64
                | Self::Packed256_Int8
                | Self::Packed256_UInt8
                | Self::Packed256_Int16
                | Self::Packed256_UInt16
                | Self::Packed256_Int32
                | Self::Packed256_UInt32
                | Self::Packed256_Int64
                | Self::Packed256_UInt64
                | Self::Packed256_Float32
                | Self::Packed256_Float64
                | Self::Packed512_Int8
                | Self::Packed512_UInt8
                | Self::Packed512_Int16
                | Self::Packed512_UInt16
                | Self::Packed512_Int32
                | Self::Packed512_UInt32
                | Self::Packed512_Int64
                | Self::Packed512_UInt64
                | Self::Packed512_Float32
                | Self::Packed512_Float64
        )
    }

    /// Returns the variant name.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_scalar_sizes() {
        assert_eq!(MemorySize::Unknown.size(), 0);
        assert_eq!(MemorySize::UInt8.size(), 1);
        assert_eq!(MemorySize::Int64.size(), 8);
        assert_eq!(MemorySize::Float80.size(), 10);
        assert_eq!(MemorySize::SegPtr32.size(), 6);
        assert_eq!(MemorySize::FpuState108.size(), 108);
        assert_eq!(MemorySize::Fxsave512.size(), 512);
        assert_eq!(MemorySize::Xsave.size(), 0);
        assert_eq!(MemorySize::Fword6.element_size(), 6);
    }

    #[test]
    fn test_packed_sizes() {
        assert_eq!(MemorySize::Packed64_Int8.size(), 8);
        assert_eq!(MemorySize::Packed64_Int8.element_size(), 1);
        assert_eq!(MemorySize::Packed512_Float64.size(), 64);
        assert_eq!(MemorySize::Packed512_Float64.element_size(), 8);
        assert!(MemorySize::Packed128_Float32.is_packed());
        assert!(!MemorySize::Packed128_Float32.is_broadcast());
    }

    #[test]
    fn test_broadcast_sizes() {
        let bcst = MemorySize::Broadcast512_Float32;
        assert!(bcst.is_broadcast());
        assert!(!bcst.is_packed());
        assert_eq!(bcst.size(), 4);
        assert_eq!(bcst.element_size(), 4);
        assert_eq!(bcst.vector_size(), 64);
        assert_eq!(MemorySize::Broadcast128_UInt64.size(), 8);
    }

    #[test]
    fn test_packed_element_divides_size() {
        for ms in MemorySize::iter().filter(|m| m.is_packed()) {
            assert_eq!(ms.size() % ms.element_size(), 0, "{ms:?}");
        }
    }
}
