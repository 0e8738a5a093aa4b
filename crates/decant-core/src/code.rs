//! Instruction codes.
//!
//! One variant per distinct encoding family. The suffix after the mnemonic
//! lists operand shapes (`Gv`, `Ev`, `VX`, `WX`, `k1z`, ...) so that the
//! legacy, VEX and EVEX encodings of an instruction map to different codes.

/// Decoded instruction code.
#[allow(non_camel_case_types)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    strum::EnumCount,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum Code {
    /// Not a valid instruction
    #[default]
    INVALID = 0,
    /// `00`
    Add_Eb_Gb,
    /// `o16 01`
    Add_Ew_Gw,
    /// `o32 01`
    Add_Ed_Gd,
    /// `REX.W 01`
    Add_Eq_Gq,
    /// `02`
    Add_Gb_Eb,
    /// `o16 03`
    Add_Gw_Ew,
    /// `o32 03`
    Add_Gd_Ed,
    /// `REX.W 03`
    Add_Gq_Eq,
    /// `04`
    Add_AL_Ib,
    /// `o16 05`
    Add_AX_Iw,
    /// `o32 05`
    Add_EAX_Id,
    /// `REX.W 05`
    Add_RAX_Id64,
    /// `o16 06`
    Pushw_ES,
    /// `o32 06`
    Pushd_ES,
    /// `o16 07`
    Popw_ES,
    /// `o32 07`
    Popd_ES,
    /// `08`
    Or_Eb_Gb,
    /// `o16 09`
    Or_Ew_Gw,
    /// `o32 09`
    Or_Ed_Gd,
    /// `REX.W 09`
    Or_Eq_Gq,
    /// `0A`
    Or_Gb_Eb,
    /// `o16 0B`
    Or_Gw_Ew,
    /// `o32 0B`
    Or_Gd_Ed,
    /// `REX.W 0B`
    Or_Gq_Eq,
    /// `0C`
    Or_AL_Ib,
    /// `o16 0D`
    Or_AX_Iw,
    /// `o32 0D`
    Or_EAX_Id,
    /// `REX.W 0D`
    Or_RAX_Id64,
    /// `o16 0E`
    Pushw_CS,
    /// `o32 0E`
    Pushd_CS,
    /// `10`
    Adc_Eb_Gb,
    /// `o16 11`
    Adc_Ew_Gw,
    /// `o32 11`
    Adc_Ed_Gd,
    /// `REX.W 11`
    Adc_Eq_Gq,
    /// `12`
    Adc_Gb_Eb,
    /// `o16 13`
    Adc_Gw_Ew,
    /// `o32 13`
    Adc_Gd_Ed,
    /// `REX.W 13`
    Adc_Gq_Eq,
    /// `14`
    Adc_AL_Ib,
    /// `o16 15`
    Adc_AX_Iw,
    /// `o32 15`
    Adc_EAX_Id,
    /// `REX.W 15`
    Adc_RAX_Id64,
    /// `o16 16`
    Pushw_SS,
    /// `o32 16`
    Pushd_SS,
    /// `o16 17`
    Popw_SS,
    /// `o32 17`
    Popd_SS,
    /// `18`
    Sbb_Eb_Gb,
    /// `o16 19`
    Sbb_Ew_Gw,
    /// `o32 19`
    Sbb_Ed_Gd,
    /// `REX.W 19`
    Sbb_Eq_Gq,
    /// `1A`
    Sbb_Gb_Eb,
    /// `o16 1B`
    Sbb_Gw_Ew,
    /// `o32 1B`
    Sbb_Gd_Ed,
    /// `REX.W 1B`
    Sbb_Gq_Eq,
    /// `1C`
    Sbb_AL_Ib,
    /// `o16 1D`
    Sbb_AX_Iw,
    /// `o32 1D`
    Sbb_EAX_Id,
    /// `REX.W 1D`
    Sbb_RAX_Id64,
    /// `o16 1E`
    Pushw_DS,
    /// `o32 1E`
    Pushd_DS,
    /// `o16 1F`
    Popw_DS,
    /// `o32 1F`
    Popd_DS,
    /// `20`
    And_Eb_Gb,
    /// `o16 21`
    And_Ew_Gw,
    /// `o32 21`
    And_Ed_Gd,
    /// `REX.W 21`
    And_Eq_Gq,
    /// `22`
    And_Gb_Eb,
    /// `o16 23`
    And_Gw_Ew,
    /// `o32 23`
    And_Gd_Ed,
    /// `REX.W 23`
    And_Gq_Eq,
    /// `24`
    And_AL_Ib,
    /// `o16 25`
    And_AX_Iw,
    /// `o32 25`
    And_EAX_Id,
    /// `REX.W 25`
    And_RAX_Id64,
    /// `27`
    Daa,
    /// `28`
    Sub_Eb_Gb,
    /// `o16 29`
    Sub_Ew_Gw,
    /// `o32 29`
    Sub_Ed_Gd,
    /// `REX.W 29`
    Sub_Eq_Gq,
    /// `2A`
    Sub_Gb_Eb,
    /// `o16 2B`
    Sub_Gw_Ew,
    /// `o32 2B`
    Sub_Gd_Ed,
    /// `REX.W 2B`
    Sub_Gq_Eq,
    /// `2C`
    Sub_AL_Ib,
    /// `o16 2D`
    Sub_AX_Iw,
    /// `o32 2D`
    Sub_EAX_Id,
    /// `REX.W 2D`
    Sub_RAX_Id64,
    /// `2F`
    Das,
    /// `30`
    Xor_Eb_Gb,
    /// `o16 31`
    Xor_Ew_Gw,
    /// `o32 31`
    Xor_Ed_Gd,
    /// `REX.W 31`
    Xor_Eq_Gq,
    /// `32`
    Xor_Gb_Eb,
    /// `o16 33`
    Xor_Gw_Ew,
    /// `o32 33`
    Xor_Gd_Ed,
    /// `REX.W 33`
    Xor_Gq_Eq,
    /// `34`
    Xor_AL_Ib,
    /// `o16 35`
    Xor_AX_Iw,
    /// `o32 35`
    Xor_EAX_Id,
    /// `REX.W 35`
    Xor_RAX_Id64,
    /// `37`
    Aaa,
    /// `38`
    Cmp_Eb_Gb,
    /// `o16 39`
    Cmp_Ew_Gw,
    /// `o32 39`
    Cmp_Ed_Gd,
    /// `REX.W 39`
    Cmp_Eq_Gq,
    /// `3A`
    Cmp_Gb_Eb,
    /// `o16 3B`
    Cmp_Gw_Ew,
    /// `o32 3B`
    Cmp_Gd_Ed,
    /// `REX.W 3B`
    Cmp_Gq_Eq,
    /// `3C`
    Cmp_AL_Ib,
    /// `o16 3D`
    Cmp_AX_Iw,
    /// `o32 3D`
    Cmp_EAX_Id,
    /// `REX.W 3D`
    Cmp_RAX_Id64,
    /// `3F`
    Aas,
    /// `o16 40`
    Inc_AX,
    /// `o32 40`
    Inc_EAX,
    /// `o16 41`
    Inc_CX,
    /// `o32 41`
    Inc_ECX,
    /// `o16 42`
    Inc_DX,
    /// `o32 42`
    Inc_EDX,
    /// `o16 43`
    Inc_BX,
    /// `o32 43`
    Inc_EBX,
    /// `o16 44`
    Inc_SP,
    /// `o32 44`
    Inc_ESP,
    /// `o16 45`
    Inc_BP,
    /// `o32 45`
    Inc_EBP,
    /// `o16 46`
    Inc_SI,
    /// `o32 46`
    Inc_ESI,
    /// `o16 47`
    Inc_DI,
    /// `o32 47`
    Inc_EDI,
    /// `o16 48`
    Dec_AX,
    /// `o32 48`
    Dec_EAX,
    /// `o16 49`
    Dec_CX,
    /// `o32 49`
    Dec_ECX,
    /// `o16 4A`
    Dec_DX,
    /// `o32 4A`
    Dec_EDX,
    /// `o16 4B`
    Dec_BX,
    /// `o32 4B`
    Dec_EBX,
    /// `o16 4C`
    Dec_SP,
    /// `o32 4C`
    Dec_ESP,
    /// `o16 4D`
    Dec_BP,
    /// `o32 4D`
    Dec_EBP,
    /// `o16 4E`
    Dec_SI,
    /// `o32 4E`
    Dec_ESI,
    /// `o16 4F`
    Dec_DI,
    /// `o32 4F`
    Dec_EDI,
    /// `o16 50`
    Push_AX,
    /// `o16 REX.B 50`
    Push_R8W,
    /// `o32 50`
    Push_EAX,
    /// `50`
    Push_RAX,
    /// `REX.B 50`
    Push_R8,
    /// `o16 51`
    Push_CX,
    /// `o16 REX.B 51`
    Push_R9W,
    /// `o32 51`
    Push_ECX,
    /// `51`
    Push_RCX,
    /// `REX.B 51`
    Push_R9,
    /// `o16 52`
    Push_DX,
    /// `o16 REX.B 52`
    Push_R10W,
    /// `o32 52`
    Push_EDX,
    /// `52`
    Push_RDX,
    /// `REX.B 52`
    Push_R10,
    /// `o16 53`
    Push_BX,
    /// `o16 REX.B 53`
    Push_R11W,
    /// `o32 53`
    Push_EBX,
    /// `53`
    Push_RBX,
    /// `REX.B 53`
    Push_R11,
    /// `o16 54`
    Push_SP,
    /// `o16 REX.B 54`
    Push_R12W,
    /// `o32 54`
    Push_ESP,
    /// `54`
    Push_RSP,
    /// `REX.B 54`
    Push_R12,
    /// `o16 55`
    Push_BP,
    /// `o16 REX.B 55`
    Push_R13W,
    /// `o32 55`
    Push_EBP,
    /// `55`
    Push_RBP,
    /// `REX.B 55`
    Push_R13,
    /// `o16 56`
    Push_SI,
    /// `o16 REX.B 56`
    Push_R14W,
    /// `o32 56`
    Push_ESI,
    /// `56`
    Push_RSI,
    /// `REX.B 56`
    Push_R14,
    /// `o16 57`
    Push_DI,
    /// `o16 REX.B 57`
    Push_R15W,
    /// `o32 57`
    Push_EDI,
    /// `57`
    Push_RDI,
    /// `REX.B 57`
    Push_R15,
    /// `o16 58`
    Pop_AX,
    /// `o16 REX.B 58`
    Pop_R8W,
    /// `o32 58`
    Pop_EAX,
    /// `58`
    Pop_RAX,
    /// `REX.B 58`
    Pop_R8,
    /// `o16 59`
    Pop_CX,
    /// `o16 REX.B 59`
    Pop_R9W,
    /// `o32 59`
    Pop_ECX,
    /// `59`
    Pop_RCX,
    /// `REX.B 59`
    Pop_R9,
    /// `o16 5A`
    Pop_DX,
    /// `o16 REX.B 5A`
    Pop_R10W,
    /// `o32 5A`
    Pop_EDX,
    /// `5A`
    Pop_RDX,
    /// `REX.B 5A`
    Pop_R10,
    /// `o16 5B`
    Pop_BX,
    /// `o16 REX.B 5B`
    Pop_R11W,
    /// `o32 5B`
    Pop_EBX,
    /// `5B`
    Pop_RBX,
    /// `REX.B 5B`
    Pop_R11,
    /// `o16 5C`
    Pop_SP,
    /// `o16 REX.B 5C`
    Pop_R12W,
    /// `o32 5C`
    Pop_ESP,
    /// `5C`
    Pop_RSP,
    /// `REX.B 5C`
    Pop_R12,
    /// `o16 5D`
    Pop_BP,
    /// `o16 REX.B 5D`
    Pop_R13W,
    /// `o32 5D`
    Pop_EBP,
    /// `5D`
    Pop_RBP,
    /// `REX.B 5D`
    Pop_R13,
    /// `o16 5E`
    Pop_SI,
    /// `o16 REX.B 5E`
    Pop_R14W,
    /// `o32 5E`
    Pop_ESI,
    /// `5E`
    Pop_RSI,
    /// `REX.B 5E`
    Pop_R14,
    /// `o16 5F`
    Pop_DI,
    /// `o16 REX.B 5F`
    Pop_R15W,
    /// `o32 5F`
    Pop_EDI,
    /// `5F`
    Pop_RDI,
    /// `REX.B 5F`
    Pop_R15,
    /// `o16 60`
    Pushaw,
    /// `o32 60`
    Pushad,
    /// `o16 61`
    Popaw,
    /// `o32 61`
    Popad,
    /// `o16 62`
    Bound_Gw_Mw2,
    /// `o32 62`
    Bound_Gd_Md2,
    /// `63`
    Arpl_Ew_Gw,
    /// `o16 63`
    Movsxd_Gw_Ew,
    /// `o32 63`
    Movsxd_Gd_Ed,
    /// `REX.W 63`
    Movsxd_Gq_Ed,
    /// `o16 68`
    Push_Iw,
    /// `o32 68`
    Push_Id,
    /// `REX.W 68`
    Push_Id64,
    /// `o16 69`
    Imul_Gw_Ew_Iw,
    /// `o32 69`
    Imul_Gd_Ed_Id,
    /// `REX.W 69`
    Imul_Gq_Eq_Id64,
    /// `o16 6A`
    Push_Ib16,
    /// `o32 6A`
    Push_Ib32,
    /// `REX.W 6A`
    Push_Ib64,
    /// `o16 6B`
    Imul_Gw_Ew_Ib16,
    /// `o32 6B`
    Imul_Gd_Ed_Ib32,
    /// `REX.W 6B`
    Imul_Gq_Eq_Ib64,
    /// `6C`
    Insb_Yb_DX,
    /// `o16 6D`
    Insw_Yw_DX,
    /// `o32 6D`
    Insd_Yd_DX,
    /// `6E`
    Outsb_DX_Xb,
    /// `o16 6F`
    Outsw_DX_Xw,
    /// `o32 6F`
    Outsd_DX_Xd,
    /// `o16 70`
    Jo_Jb16,
    /// `o32 70`
    Jo_Jb32,
    /// `70`
    Jo_Jb64,
    /// `o16 71`
    Jno_Jb16,
    /// `o32 71`
    Jno_Jb32,
    /// `71`
    Jno_Jb64,
    /// `o16 72`
    Jb_Jb16,
    /// `o32 72`
    Jb_Jb32,
    /// `72`
    Jb_Jb64,
    /// `o16 73`
    Jae_Jb16,
    /// `o32 73`
    Jae_Jb32,
    /// `73`
    Jae_Jb64,
    /// `o16 74`
    Je_Jb16,
    /// `o32 74`
    Je_Jb32,
    /// `74`
    Je_Jb64,
    /// `o16 75`
    Jne_Jb16,
    /// `o32 75`
    Jne_Jb32,
    /// `75`
    Jne_Jb64,
    /// `o16 76`
    Jbe_Jb16,
    /// `o32 76`
    Jbe_Jb32,
    /// `76`
    Jbe_Jb64,
    /// `o16 77`
    Ja_Jb16,
    /// `o32 77`
    Ja_Jb32,
    /// `77`
    Ja_Jb64,
    /// `o16 78`
    Js_Jb16,
    /// `o32 78`
    Js_Jb32,
    /// `78`
    Js_Jb64,
    /// `o16 79`
    Jns_Jb16,
    /// `o32 79`
    Jns_Jb32,
    /// `79`
    Jns_Jb64,
    /// `o16 7A`
    Jp_Jb16,
    /// `o32 7A`
    Jp_Jb32,
    /// `7A`
    Jp_Jb64,
    /// `o16 7B`
    Jnp_Jb16,
    /// `o32 7B`
    Jnp_Jb32,
    /// `7B`
    Jnp_Jb64,
    /// `o16 7C`
    Jl_Jb16,
    /// `o32 7C`
    Jl_Jb32,
    /// `7C`
    Jl_Jb64,
    /// `o16 7D`
    Jge_Jb16,
    /// `o32 7D`
    Jge_Jb32,
    /// `7D`
    Jge_Jb64,
    /// `o16 7E`
    Jle_Jb16,
    /// `o32 7E`
    Jle_Jb32,
    /// `7E`
    Jle_Jb64,
    /// `o16 7F`
    Jg_Jb16,
    /// `o32 7F`
    Jg_Jb32,
    /// `7F`
    Jg_Jb64,
    /// `80 /0`
    Add_Eb_Ib,
    /// `80 /1`
    Or_Eb_Ib,
    /// `80 /2`
    Adc_Eb_Ib,
    /// `80 /3`
    Sbb_Eb_Ib,
    /// `80 /4`
    And_Eb_Ib,
    /// `80 /5`
    Sub_Eb_Ib,
    /// `80 /6`
    Xor_Eb_Ib,
    /// `80 /7`
    Cmp_Eb_Ib,
    /// `o16 81 /0`
    Add_Ew_Iw,
    /// `o32 81 /0`
    Add_Ed_Id,
    /// `REX.W 81 /0`
    Add_Eq_Id64,
    /// `o16 81 /1`
    Or_Ew_Iw,
    /// `o32 81 /1`
    Or_Ed_Id,
    /// `REX.W 81 /1`
    Or_Eq_Id64,
    /// `o16 81 /2`
    Adc_Ew_Iw,
    /// `o32 81 /2`
    Adc_Ed_Id,
    /// `REX.W 81 /2`
    Adc_Eq_Id64,
    /// `o16 81 /3`
    Sbb_Ew_Iw,
    /// `o32 81 /3`
    Sbb_Ed_Id,
    /// `REX.W 81 /3`
    Sbb_Eq_Id64,
    /// `o16 81 /4`
    And_Ew_Iw,
    /// `o32 81 /4`
    And_Ed_Id,
    /// `REX.W 81 /4`
    And_Eq_Id64,
    /// `o16 81 /5`
    Sub_Ew_Iw,
    /// `o32 81 /5`
    Sub_Ed_Id,
    /// `REX.W 81 /5`
    Sub_Eq_Id64,
    /// `o16 81 /6`
    Xor_Ew_Iw,
    /// `o32 81 /6`
    Xor_Ed_Id,
    /// `REX.W 81 /6`
    Xor_Eq_Id64,
    /// `o16 81 /7`
    Cmp_Ew_Iw,
    /// `o32 81 /7`
    Cmp_Ed_Id,
    /// `REX.W 81 /7`
    Cmp_Eq_Id64,
    /// `o16 83 /0`
    Add_Ew_Ib16,
    /// `o32 83 /0`
    Add_Ed_Ib32,
    /// `REX.W 83 /0`
    Add_Eq_Ib64,
    /// `o16 83 /1`
    Or_Ew_Ib16,
    /// `o32 83 /1`
    Or_Ed_Ib32,
    /// `REX.W 83 /1`
    Or_Eq_Ib64,
    /// `o16 83 /2`
    Adc_Ew_Ib16,
    /// `o32 83 /2`
    Adc_Ed_Ib32,
    /// `REX.W 83 /2`
    Adc_Eq_Ib64,
    /// `o16 83 /3`
    Sbb_Ew_Ib16,
    /// `o32 83 /3`
    Sbb_Ed_Ib32,
    /// `REX.W 83 /3`
    Sbb_Eq_Ib64,
    /// `o16 83 /4`
    And_Ew_Ib16,
    /// `o32 83 /4`
    And_Ed_Ib32,
    /// `REX.W 83 /4`
    And_Eq_Ib64,
    /// `o16 83 /5`
    Sub_Ew_Ib16,
    /// `o32 83 /5`
    Sub_Ed_Ib32,
    /// `REX.W 83 /5`
    Sub_Eq_Ib64,
    /// `o16 83 /6`
    Xor_Ew_Ib16,
    /// `o32 83 /6`
    Xor_Ed_Ib32,
    /// `REX.W 83 /6`
    Xor_Eq_Ib64,
    /// `o16 83 /7`
    Cmp_Ew_Ib16,
    /// `o32 83 /7`
    Cmp_Ed_Ib32,
    /// `REX.W 83 /7`
    Cmp_Eq_Ib64,
    /// `84`
    Test_Eb_Gb,
    /// `o16 85`
    Test_Ew_Gw,
    /// `o32 85`
    Test_Ed_Gd,
    /// `REX.W 85`
    Test_Eq_Gq,
    /// `86`
    Xchg_Eb_Gb,
    /// `o16 87`
    Xchg_Ew_Gw,
    /// `o32 87`
    Xchg_Ed_Gd,
    /// `REX.W 87`
    Xchg_Eq_Gq,
    /// `88`
    Mov_Eb_Gb,
    /// `o16 89`
    Mov_Ew_Gw,
    /// `o32 89`
    Mov_Ed_Gd,
    /// `REX.W 89`
    Mov_Eq_Gq,
    /// `8A`
    Mov_Gb_Eb,
    /// `o16 8B`
    Mov_Gw_Ew,
    /// `o32 8B`
    Mov_Gd_Ed,
    /// `REX.W 8B`
    Mov_Gq_Eq,
    /// `o16 8C`
    Mov_Ew_Sw,
    /// `o32 8C`
    Mov_Ed_Sw,
    /// `REX.W 8C`
    Mov_Eq_Sw,
    /// `o16 8D`
    Lea_Gw_M,
    /// `o32 8D`
    Lea_Gd_M,
    /// `REX.W 8D`
    Lea_Gq_M,
    /// `o16 8E`
    Mov_Sw_Ew,
    /// `o32 8E`
    Mov_Sw_Ed,
    /// `REX.W 8E`
    Mov_Sw_Eq,
    /// `o16 8F /0`
    Pop_Ew,
    /// `o32 8F /0`
    Pop_Ed,
    /// `REX.W 8F /0`
    Pop_Eq,
    /// `o16 90`
    Nopw,
    /// `o16 REX.B 90`
    Xchg_R8W_AX,
    /// `o32 90`
    Nopd,
    /// `o32 REX.B 90`
    Xchg_R8D_EAX,
    /// `REX.W 90`
    Nopq,
    /// `REX.W REX.B 90`
    Xchg_R8_RAX,
    /// `o16 91`
    Xchg_CX_AX,
    /// `o16 REX.B 91`
    Xchg_R9W_AX,
    /// `o32 91`
    Xchg_ECX_EAX,
    /// `o32 REX.B 91`
    Xchg_R9D_EAX,
    /// `REX.W 91`
    Xchg_RCX_RAX,
    /// `REX.W REX.B 91`
    Xchg_R9_RAX,
    /// `o16 92`
    Xchg_DX_AX,
    /// `o16 REX.B 92`
    Xchg_R10W_AX,
    /// `o32 92`
    Xchg_EDX_EAX,
    /// `o32 REX.B 92`
    Xchg_R10D_EAX,
    /// `REX.W 92`
    Xchg_RDX_RAX,
    /// `REX.W REX.B 92`
    Xchg_R10_RAX,
    /// `o16 93`
    Xchg_BX_AX,
    /// `o16 REX.B 93`
    Xchg_R11W_AX,
    /// `o32 93`
    Xchg_EBX_EAX,
    /// `o32 REX.B 93`
    Xchg_R11D_EAX,
    /// `REX.W 93`
    Xchg_RBX_RAX,
    /// `REX.W REX.B 93`
    Xchg_R11_RAX,
    /// `o16 94`
    Xchg_SP_AX,
    /// `o16 REX.B 94`
    Xchg_R12W_AX,
    /// `o32 94`
    Xchg_ESP_EAX,
    /// `o32 REX.B 94`
    Xchg_R12D_EAX,
    /// `REX.W 94`
    Xchg_RSP_RAX,
    /// `REX.W REX.B 94`
    Xchg_R12_RAX,
    /// `o16 95`
    Xchg_BP_AX,
    /// `o16 REX.B 95`
    Xchg_R13W_AX,
    /// `o32 95`
    Xchg_EBP_EAX,
    /// `o32 REX.B 95`
    Xchg_R13D_EAX,
    /// `REX.W 95`
    Xchg_RBP_RAX,
    /// `REX.W REX.B 95`
    Xchg_R13_RAX,
    /// `o16 96`
    Xchg_SI_AX,
    /// `o16 REX.B 96`
    Xchg_R14W_AX,
    /// `o32 96`
    Xchg_ESI_EAX,
    /// `o32 REX.B 96`
    Xchg_R14D_EAX,
    /// `REX.W 96`
    Xchg_RSI_RAX,
    /// `REX.W REX.B 96`
    Xchg_R14_RAX,
    /// `o16 97`
    Xchg_DI_AX,
    /// `o16 REX.B 97`
    Xchg_R15W_AX,
    /// `o32 97`
    Xchg_EDI_EAX,
    /// `o32 REX.B 97`
    Xchg_R15D_EAX,
    /// `REX.W 97`
    Xchg_RDI_RAX,
    /// `REX.W REX.B 97`
    Xchg_R15_RAX,
    /// `F3 90`
    Pause,
    /// `o16 98`
    Cbw,
    /// `o32 98`
    Cwde,
    /// `REX.W 98`
    Cdqe,
    /// `o16 99`
    Cwd,
    /// `o32 99`
    Cdq,
    /// `REX.W 99`
    Cqo,
    /// `o16 9A`
    Call_Aww,
    /// `o32 9A`
    Call_Adw,
    /// `9B`
    Wait,
    /// `o16 9C`
    Pushfw,
    /// `o32 9C`
    Pushfd,
    /// `9C`
    Pushfq,
    /// `o16 9D`
    Popfw,
    /// `o32 9D`
    Popfd,
    /// `9D`
    Popfq,
    /// `9E`
    Sahf,
    /// `9F`
    Lahf,
    /// `A0`
    Mov_AL_Ob,
    /// `o16 A1`
    Mov_AX_Ow,
    /// `o32 A1`
    Mov_EAX_Od,
    /// `REX.W A1`
    Mov_RAX_Oq,
    /// `A2`
    Mov_Ob_AL,
    /// `o16 A3`
    Mov_Ow_AX,
    /// `o32 A3`
    Mov_Od_EAX,
    /// `REX.W A3`
    Mov_Oq_RAX,
    /// `A4`
    Movsb_Yb_Xb,
    /// `o16 A5`
    Movsw_Yw_Xw,
    /// `o32 A5`
    Movsd_Yd_Xd,
    /// `REX.W A5`
    Movsq_Yq_Xq,
    /// `A6`
    Cmpsb_Xb_Yb,
    /// `o16 A7`
    Cmpsw_Xw_Yw,
    /// `o32 A7`
    Cmpsd_Xd_Yd,
    /// `REX.W A7`
    Cmpsq_Xq_Yq,
    /// `A8`
    Test_AL_Ib,
    /// `o16 A9`
    Test_AX_Iw,
    /// `o32 A9`
    Test_EAX_Id,
    /// `REX.W A9`
    Test_RAX_Id64,
    /// `AA`
    Stosb_Yb_AL,
    /// `o16 AB`
    Stosw_Yw_AX,
    /// `o32 AB`
    Stosd_Yd_EAX,
    /// `REX.W AB`
    Stosq_Yq_RAX,
    /// `AC`
    Lodsb_AL_Xb,
    /// `o16 AD`
    Lodsw_AX_Xw,
    /// `o32 AD`
    Lodsd_EAX_Xd,
    /// `REX.W AD`
    Lodsq_RAX_Xq,
    /// `AE`
    Scasb_AL_Yb,
    /// `o16 AF`
    Scasw_AX_Yw,
    /// `o32 AF`
    Scasd_EAX_Yd,
    /// `REX.W AF`
    Scasq_RAX_Yq,
    /// `B0`
    Mov_AL_Ib,
    /// `REX.B B0`
    Mov_R8L_Ib,
    /// `B1`
    Mov_CL_Ib,
    /// `REX.B B1`
    Mov_R9L_Ib,
    /// `B2`
    Mov_DL_Ib,
    /// `REX.B B2`
    Mov_R10L_Ib,
    /// `B3`
    Mov_BL_Ib,
    /// `REX.B B3`
    Mov_R11L_Ib,
    /// `B4`
    Mov_AH_Ib,
    /// `REX B4`
    Mov_SPL_Ib,
    /// `REX.B B4`
    Mov_R12L_Ib,
    /// `B5`
    Mov_CH_Ib,
    /// `REX B5`
    Mov_BPL_Ib,
    /// `REX.B B5`
    Mov_R13L_Ib,
    /// `B6`
    Mov_DH_Ib,
    /// `REX B6`
    Mov_SIL_Ib,
    /// `REX.B B6`
    Mov_R14L_Ib,
    /// `B7`
    Mov_BH_Ib,
    /// `REX B7`
    Mov_DIL_Ib,
    /// `REX.B B7`
    Mov_R15L_Ib,
    /// `o16 B8`
    Mov_AX_Iw,
    /// `o16 REX.B B8`
    Mov_R8W_Iw,
    /// `o32 B8`
    Mov_EAX_Id,
    /// `o32 REX.B B8`
    Mov_R8D_Id,
    /// `REX.W B8`
    Mov_RAX_Iq,
    /// `REX.W REX.B B8`
    Mov_R8_Iq,
    /// `o16 B9`
    Mov_CX_Iw,
    /// `o16 REX.B B9`
    Mov_R9W_Iw,
    /// `o32 B9`
    Mov_ECX_Id,
    /// `o32 REX.B B9`
    Mov_R9D_Id,
    /// `REX.W B9`
    Mov_RCX_Iq,
    /// `REX.W REX.B B9`
    Mov_R9_Iq,
    /// `o16 BA`
    Mov_DX_Iw,
    /// `o16 REX.B BA`
    Mov_R10W_Iw,
    /// `o32 BA`
    Mov_EDX_Id,
    /// `o32 REX.B BA`
    Mov_R10D_Id,
    /// `REX.W BA`
    Mov_RDX_Iq,
    /// `REX.W REX.B BA`
    Mov_R10_Iq,
    /// `o16 BB`
    Mov_BX_Iw,
    /// `o16 REX.B BB`
    Mov_R11W_Iw,
    /// `o32 BB`
    Mov_EBX_Id,
    /// `o32 REX.B BB`
    Mov_R11D_Id,
    /// `REX.W BB`
    Mov_RBX_Iq,
    /// `REX.W REX.B BB`
    Mov_R11_Iq,
    /// `o16 BC`
    Mov_SP_Iw,
    /// `o16 REX.B BC`
    Mov_R12W_Iw,
    /// `o32 BC`
    Mov_ESP_Id,
    /// `o32 REX.B BC`
    Mov_R12D_Id,
    /// `REX.W BC`
    Mov_RSP_Iq,
    /// `REX.W REX.B BC`
    Mov_R12_Iq,
    /// `o16 BD`
    Mov_BP_Iw,
    /// `o16 REX.B BD`
    Mov_R13W_Iw,
    /// `o32 BD`
    Mov_EBP_Id,
    /// `o32 REX.B BD`
    Mov_R13D_Id,
    /// `REX.W BD`
    Mov_RBP_Iq,
    /// `REX.W REX.B BD`
    Mov_R13_Iq,
    /// `o16 BE`
    Mov_SI_Iw,
    /// `o16 REX.B BE`
    Mov_R14W_Iw,
    /// `o32 BE`
    Mov_ESI_Id,
    /// `o32 REX.B BE`
    Mov_R14D_Id,
    /// `REX.W BE`
    Mov_RSI_Iq,
    /// `REX.W REX.B BE`
    Mov_R14_Iq,
    /// `o16 BF`
    Mov_DI_Iw,
    /// `o16 REX.B BF`
    Mov_R15W_Iw,
    /// `o32 BF`
    Mov_EDI_Id,
    /// `o32 REX.B BF`
    Mov_R15D_Id,
    /// `REX.W BF`
    Mov_RDI_Iq,
    /// `REX.W REX.B BF`
    Mov_R15_Iq,
    /// `C0 /0`
    Rol_Eb_Ib,
    /// `C0 /1`
    Ror_Eb_Ib,
    /// `C0 /2`
    Rcl_Eb_Ib,
    /// `C0 /3`
    Rcr_Eb_Ib,
    /// `C0 /4`
    Shl_Eb_Ib,
    /// `C0 /5`
    Shr_Eb_Ib,
    /// `C0 /7`
    Sar_Eb_Ib,
    /// `o16 C1 /0`
    Rol_Ew_Ib,
    /// `o32 C1 /0`
    Rol_Ed_Ib,
    /// `REX.W C1 /0`
    Rol_Eq_Ib,
    /// `o16 C1 /1`
    Ror_Ew_Ib,
    /// `o32 C1 /1`
    Ror_Ed_Ib,
    /// `REX.W C1 /1`
    Ror_Eq_Ib,
    /// `o16 C1 /2`
    Rcl_Ew_Ib,
    /// `o32 C1 /2`
    Rcl_Ed_Ib,
    /// `REX.W C1 /2`
    Rcl_Eq_Ib,
    /// `o16 C1 /3`
    Rcr_Ew_Ib,
    /// `o32 C1 /3`
    Rcr_Ed_Ib,
    /// `REX.W C1 /3`
    Rcr_Eq_Ib,
    /// `o16 C1 /4`
    Shl_Ew_Ib,
    /// `o32 C1 /4`
    Shl_Ed_Ib,
    /// `REX.W C1 /4`
    Shl_Eq_Ib,
    /// `o16 C1 /5`
    Shr_Ew_Ib,
    /// `o32 C1 /5`
    Shr_Ed_Ib,
    /// `REX.W C1 /5`
    Shr_Eq_Ib,
    /// `o16 C1 /7`
    Sar_Ew_Ib,
    /// `o32 C1 /7`
    Sar_Ed_Ib,
    /// `REX.W C1 /7`
    Sar_Eq_Ib,
    /// `o16 C2`
    Retnw_Iw,
    /// `o32 C2`
    Retnd_Iw,
    /// `C2`
    Retnq_Iw,
    /// `o16 C3`
    Retnw,
    /// `o32 C3`
    Retnd,
    /// `C3`
    Retnq,
    /// `o16 C4`
    Les_Gw_Mp,
    /// `o32 C4`
    Les_Gd_Mp,
    /// `o16 C5`
    Lds_Gw_Mp,
    /// `o32 C5`
    Lds_Gd_Mp,
    /// `C6 /0`
    Mov_Eb_Ib,
    /// `C6 F8`
    Xabort_Ib,
    /// `o16 C7 /0`
    Mov_Ew_Iw,
    /// `o32 C7 /0`
    Mov_Ed_Id,
    /// `REX.W C7 /0`
    Mov_Eq_Id64,
    /// `o16 C7 F8`
    Xbegin_Jw16,
    /// `o32 C7 F8`
    Xbegin_Jd32,
    /// `REX.W C7 F8`
    Xbegin_Jd64,
    /// `o16 C8`
    Enterw_Iw_Ib,
    /// `o32 C8`
    Enterd_Iw_Ib,
    /// `REX.W C8`
    Enterq_Iw_Ib,
    /// `o16 C9`
    Leavew,
    /// `o32 C9`
    Leaved,
    /// `REX.W C9`
    Leaveq,
    /// `o16 CA`
    Retfw_Iw,
    /// `o32 CA`
    Retfd_Iw,
    /// `REX.W CA`
    Retfq_Iw,
    /// `o16 CB`
    Retfw,
    /// `o32 CB`
    Retfd,
    /// `REX.W CB`
    Retfq,
    /// `CC`
    Int3,
    /// `CD`
    Int_Ib,
    /// `CE`
    Into,
    /// `o16 CF`
    Iretw,
    /// `o32 CF`
    Iretd,
    /// `REX.W CF`
    Iretq,
    /// `D0 /0`
    Rol_Eb_1,
    /// `D0 /1`
    Ror_Eb_1,
    /// `D0 /2`
    Rcl_Eb_1,
    /// `D0 /3`
    Rcr_Eb_1,
    /// `D0 /4`
    Shl_Eb_1,
    /// `D0 /5`
    Shr_Eb_1,
    /// `D0 /7`
    Sar_Eb_1,
    /// `o16 D1 /0`
    Rol_Ew_1,
    /// `o32 D1 /0`
    Rol_Ed_1,
    /// `REX.W D1 /0`
    Rol_Eq_1,
    /// `o16 D1 /1`
    Ror_Ew_1,
    /// `o32 D1 /1`
    Ror_Ed_1,
    /// `REX.W D1 /1`
    Ror_Eq_1,
    /// `o16 D1 /2`
    Rcl_Ew_1,
    /// `o32 D1 /2`
    Rcl_Ed_1,
    /// `REX.W D1 /2`
    Rcl_Eq_1,
    /// `o16 D1 /3`
    Rcr_Ew_1,
    /// `o32 D1 /3`
    Rcr_Ed_1,
    /// `REX.W D1 /3`
    Rcr_Eq_1,
    /// `o16 D1 /4`
    Shl_Ew_1,
    /// `o32 D1 /4`
    Shl_Ed_1,
    /// `REX.W D1 /4`
    Shl_Eq_1,
    /// `o16 D1 /5`
    Shr_Ew_1,
    /// `o32 D1 /5`
    Shr_Ed_1,
    /// `REX.W D1 /5`
    Shr_Eq_1,
    /// `o16 D1 /7`
    Sar_Ew_1,
    /// `o32 D1 /7`
    Sar_Ed_1,
    /// `REX.W D1 /7`
    Sar_Eq_1,
    /// `D2 /0`
    Rol_Eb_CL,
    /// `D2 /1`
    Ror_Eb_CL,
    /// `D2 /2`
    Rcl_Eb_CL,
    /// `D2 /3`
    Rcr_Eb_CL,
    /// `D2 /4`
    Shl_Eb_CL,
    /// `D2 /5`
    Shr_Eb_CL,
    /// `D2 /7`
    Sar_Eb_CL,
    /// `o16 D3 /0`
    Rol_Ew_CL,
    /// `o32 D3 /0`
    Rol_Ed_CL,
    /// `REX.W D3 /0`
    Rol_Eq_CL,
    /// `o16 D3 /1`
    Ror_Ew_CL,
    /// `o32 D3 /1`
    Ror_Ed_CL,
    /// `REX.W D3 /1`
    Ror_Eq_CL,
    /// `o16 D3 /2`
    Rcl_Ew_CL,
    /// `o32 D3 /2`
    Rcl_Ed_CL,
    /// `REX.W D3 /2`
    Rcl_Eq_CL,
    /// `o16 D3 /3`
    Rcr_Ew_CL,
    /// `o32 D3 /3`
    Rcr_Ed_CL,
    /// `REX.W D3 /3`
    Rcr_Eq_CL,
    /// `o16 D3 /4`
    Shl_Ew_CL,
    /// `o32 D3 /4`
    Shl_Ed_CL,
    /// `REX.W D3 /4`
    Shl_Eq_CL,
    /// `o16 D3 /5`
    Shr_Ew_CL,
    /// `o32 D3 /5`
    Shr_Ed_CL,
    /// `REX.W D3 /5`
    Shr_Eq_CL,
    /// `o16 D3 /7`
    Sar_Ew_CL,
    /// `o32 D3 /7`
    Sar_Ed_CL,
    /// `REX.W D3 /7`
    Sar_Eq_CL,
    /// `D4`
    Aam_Ib,
    /// `D5`
    Aad_Ib,
    /// `D6`
    Salc,
    /// `D7`
    Xlatb,
    /// `D8 /0`
    Fadd_Mf32,
    /// `D8 /1`
    Fmul_Mf32,
    /// `D8 /2`
    Fcom_Mf32,
    /// `D8 /3`
    Fcomp_Mf32,
    /// `D8 /4`
    Fsub_Mf32,
    /// `D8 /5`
    Fsubr_Mf32,
    /// `D8 /6`
    Fdiv_Mf32,
    /// `D8 /7`
    Fdivr_Mf32,
    /// `D8 C0+i`
    Fadd_ST_STi,
    /// `D8 C8+i`
    Fmul_ST_STi,
    /// `D8 D0+i`
    Fcom_ST_STi,
    /// `D8 D8+i`
    Fcomp_ST_STi,
    /// `D8 E0+i`
    Fsub_ST_STi,
    /// `D8 E8+i`
    Fsubr_ST_STi,
    /// `D8 F0+i`
    Fdiv_ST_STi,
    /// `D8 F8+i`
    Fdivr_ST_STi,
    /// `D9 /0`
    Fld_Mf32,
    /// `D9 /2`
    Fst_Mf32,
    /// `D9 /3`
    Fstp_Mf32,
    /// `o16 D9 /4`
    Fldenv_M14,
    /// `o32 D9 /4`
    Fldenv_M28,
    /// `D9 /5`
    Fldcw_Mw,
    /// `o16 D9 /6`
    Fnstenv_M14,
    /// `o32 D9 /6`
    Fnstenv_M28,
    /// `D9 /7`
    Fnstcw_Mw,
    /// `D9 C0+i`
    Fld_ST_STi,
    /// `D9 C8+i`
    Fxch_ST_STi,
    /// `D9 D0`
    Fnop,
    /// `D9 E0`
    Fchs,
    /// `D9 E1`
    Fabs,
    /// `D9 E4`
    Ftst,
    /// `D9 E5`
    Fxam,
    /// `D9 E8`
    Fld1,
    /// `D9 E9`
    Fldl2t,
    /// `D9 EA`
    Fldl2e,
    /// `D9 EB`
    Fldpi,
    /// `D9 EC`
    Fldlg2,
    /// `D9 ED`
    Fldln2,
    /// `D9 EE`
    Fldz,
    /// `D9 F0`
    F2xm1,
    /// `D9 F1`
    Fyl2x,
    /// `D9 F2`
    Fptan,
    /// `D9 F3`
    Fpatan,
    /// `D9 F4`
    Fxtract,
    /// `D9 F5`
    Fprem1,
    /// `D9 F6`
    Fdecstp,
    /// `D9 F7`
    Fincstp,
    /// `D9 F8`
    Fprem,
    /// `D9 F9`
    Fyl2xp1,
    /// `D9 FA`
    Fsqrt,
    /// `D9 FB`
    Fsincos,
    /// `D9 FC`
    Frndint,
    /// `D9 FD`
    Fscale,
    /// `D9 FE`
    Fsin,
    /// `D9 FF`
    Fcos,
    /// `DA /0`
    Fiadd_Mfi32,
    /// `DA /1`
    Fimul_Mfi32,
    /// `DA /2`
    Ficom_Mfi32,
    /// `DA /3`
    Ficomp_Mfi32,
    /// `DA /4`
    Fisub_Mfi32,
    /// `DA /5`
    Fisubr_Mfi32,
    /// `DA /6`
    Fidiv_Mfi32,
    /// `DA /7`
    Fidivr_Mfi32,
    /// `DA C0+i`
    Fcmovb_ST_STi,
    /// `DA C8+i`
    Fcmove_ST_STi,
    /// `DA D0+i`
    Fcmovbe_ST_STi,
    /// `DA D8+i`
    Fcmovu_ST_STi,
    /// `DA E9`
    Fucompp,
    /// `DB /0`
    Fild_Mfi32,
    /// `DB /1`
    Fisttp_Mfi32,
    /// `DB /2`
    Fist_Mfi32,
    /// `DB /3`
    Fistp_Mfi32,
    /// `DB /5`
    Fld_Mf80,
    /// `DB /7`
    Fstp_Mf80,
    /// `DB C0+i`
    Fcmovnb_ST_STi,
    /// `DB C8+i`
    Fcmovne_ST_STi,
    /// `DB D0+i`
    Fcmovnbe_ST_STi,
    /// `DB D8+i`
    Fcmovnu_ST_STi,
    /// `DB E2`
    Fnclex,
    /// `DB E3`
    Fninit,
    /// `DB E8+i`
    Fucomi_ST_STi,
    /// `DB F0+i`
    Fcomi_ST_STi,
    /// `DC /0`
    Fadd_Mf64,
    /// `DC /1`
    Fmul_Mf64,
    /// `DC /2`
    Fcom_Mf64,
    /// `DC /3`
    Fcomp_Mf64,
    /// `DC /4`
    Fsub_Mf64,
    /// `DC /5`
    Fsubr_Mf64,
    /// `DC /6`
    Fdiv_Mf64,
    /// `DC /7`
    Fdivr_Mf64,
    /// `DC C0+i`
    Fadd_STi_ST,
    /// `DC C8+i`
    Fmul_STi_ST,
    /// `DC E0+i`
    Fsubr_STi_ST,
    /// `DC E8+i`
    Fsub_STi_ST,
    /// `DC F0+i`
    Fdivr_STi_ST,
    /// `DC F8+i`
    Fdiv_STi_ST,
    /// `DD /0`
    Fld_Mf64,
    /// `DD /1`
    Fisttp_Mf64,
    /// `DD /2`
    Fst_Mf64,
    /// `DD /3`
    Fstp_Mf64,
    /// `DD /4`
    Frstor_M98,
    /// `DD /4`
    Frstor_M108,
    /// `DD /6`
    Fnsave_M98,
    /// `DD /6`
    Fnsave_M108,
    /// `DD /7`
    Fnstsw_Mw,
    /// `DD C0+i`
    Ffree_STi,
    /// `DD D0+i`
    Fst_STi,
    /// `DD D8+i`
    Fstp_STi,
    /// `DD E0+i`
    Fucom_ST_STi,
    /// `DD E8+i`
    Fucomp_ST_STi,
    /// `DE /0`
    Fiadd_Mfi16,
    /// `DE /1`
    Fimul_Mfi16,
    /// `DE /2`
    Ficom_Mfi16,
    /// `DE /3`
    Ficomp_Mfi16,
    /// `DE /4`
    Fisub_Mfi16,
    /// `DE /5`
    Fisubr_Mfi16,
    /// `DE /6`
    Fidiv_Mfi16,
    /// `DE /7`
    Fidivr_Mfi16,
    /// `DE C0+i`
    Faddp_STi_ST,
    /// `DE C8+i`
    Fmulp_STi_ST,
    /// `DE D9`
    Fcompp,
    /// `DE E0+i`
    Fsubrp_STi_ST,
    /// `DE E8+i`
    Fsubp_STi_ST,
    /// `DE F0+i`
    Fdivrp_STi_ST,
    /// `DE F8+i`
    Fdivp_STi_ST,
    /// `DF /0`
    Fild_Mfi16,
    /// `DF /1`
    Fisttp_Mfi16,
    /// `DF /2`
    Fist_Mfi16,
    /// `DF /3`
    Fistp_Mfi16,
    /// `DF /4`
    Fbld_Mfbcd,
    /// `DF /5`
    Fild_Mfi64,
    /// `DF /6`
    Fbstp_Mfbcd,
    /// `DF /7`
    Fistp_Mfi64,
    /// `DF E0`
    Fnstsw_AX,
    /// `DF E8+i`
    Fucomip_ST_STi,
    /// `DF F0+i`
    Fcomip_ST_STi,
    /// `a16 o16 E0`
    Loopne_Jb16_CX,
    /// `a16 o32 E0`
    Loopne_Jb32_CX,
    /// `a32 o16 E0`
    Loopne_Jb16_ECX,
    /// `a32 o32 E0`
    Loopne_Jb32_ECX,
    /// `a32 E0`
    Loopne_Jb64_ECX,
    /// `E0`
    Loopne_Jb64_RCX,
    /// `a16 o16 E1`
    Loope_Jb16_CX,
    /// `a16 o32 E1`
    Loope_Jb32_CX,
    /// `a32 o16 E1`
    Loope_Jb16_ECX,
    /// `a32 o32 E1`
    Loope_Jb32_ECX,
    /// `a32 E1`
    Loope_Jb64_ECX,
    /// `E1`
    Loope_Jb64_RCX,
    /// `a16 o16 E2`
    Loop_Jb16_CX,
    /// `a16 o32 E2`
    Loop_Jb32_CX,
    /// `a32 o16 E2`
    Loop_Jb16_ECX,
    /// `a32 o32 E2`
    Loop_Jb32_ECX,
    /// `a32 E2`
    Loop_Jb64_ECX,
    /// `E2`
    Loop_Jb64_RCX,
    /// `a16 o16 E3`
    Jcxz_Jb16,
    /// `a16 o32 E3`
    Jcxz_Jb32,
    /// `a32 o16 E3`
    Jecxz_Jb16,
    /// `a32 o32 E3`
    Jecxz_Jb32,
    /// `a32 E3`
    Jecxz_Jb64,
    /// `E3`
    Jrcxz_Jb64,
    /// `E4`
    In_AL_Ib,
    /// `o16 E5`
    In_AX_Ib,
    /// `o32 E5`
    In_EAX_Ib,
    /// `E6`
    Out_Ib_AL,
    /// `o16 E7`
    Out_Ib_AX,
    /// `o32 E7`
    Out_Ib_EAX,
    /// `o16 E8`
    Call_Jw16,
    /// `o32 E8`
    Call_Jd32,
    /// `E8`
    Call_Jd64,
    /// `o16 E9`
    Jmp_Jw16,
    /// `o32 E9`
    Jmp_Jd32,
    /// `E9`
    Jmp_Jd64,
    /// `o16 EA`
    Jmp_Aww,
    /// `o32 EA`
    Jmp_Adw,
    /// `o16 EB`
    Jmp_Jb16,
    /// `o32 EB`
    Jmp_Jb32,
    /// `EB`
    Jmp_Jb64,
    /// `EC`
    In_AL_DX,
    /// `o16 ED`
    In_AX_DX,
    /// `o32 ED`
    In_EAX_DX,
    /// `EE`
    Out_DX_AL,
    /// `o16 EF`
    Out_DX_AX,
    /// `o32 EF`
    Out_DX_EAX,
    /// `F1`
    Int1,
    /// `F4`
    Hlt,
    /// `F5`
    Cmc,
    /// `F6 /0`
    Test_Eb_Ib,
    /// `F6 /2`
    Not_Eb,
    /// `F6 /3`
    Neg_Eb,
    /// `F6 /4`
    Mul_Eb,
    /// `F6 /5`
    Imul_Eb,
    /// `F6 /6`
    Div_Eb,
    /// `F6 /7`
    Idiv_Eb,
    /// `o16 F7 /0`
    Test_Ew_Iw,
    /// `o32 F7 /0`
    Test_Ed_Id,
    /// `REX.W F7 /0`
    Test_Eq_Id64,
    /// `o16 F7 /2`
    Not_Ew,
    /// `o32 F7 /2`
    Not_Ed,
    /// `REX.W F7 /2`
    Not_Eq,
    /// `o16 F7 /3`
    Neg_Ew,
    /// `o32 F7 /3`
    Neg_Ed,
    /// `REX.W F7 /3`
    Neg_Eq,
    /// `o16 F7 /4`
    Mul_Ew,
    /// `o32 F7 /4`
    Mul_Ed,
    /// `REX.W F7 /4`
    Mul_Eq,
    /// `o16 F7 /5`
    Imul_Ew,
    /// `o32 F7 /5`
    Imul_Ed,
    /// `REX.W F7 /5`
    Imul_Eq,
    /// `o16 F7 /6`
    Div_Ew,
    /// `o32 F7 /6`
    Div_Ed,
    /// `REX.W F7 /6`
    Div_Eq,
    /// `o16 F7 /7`
    Idiv_Ew,
    /// `o32 F7 /7`
    Idiv_Ed,
    /// `REX.W F7 /7`
    Idiv_Eq,
    /// `F8`
    Clc,
    /// `F9`
    Stc,
    /// `FA`
    Cli,
    /// `FB`
    Sti,
    /// `FC`
    Cld,
    /// `FD`
    Std,
    /// `FE /0`
    Inc_Eb,
    /// `FE /1`
    Dec_Eb,
    /// `o16 FF /0`
    Inc_Ew,
    /// `o32 FF /0`
    Inc_Ed,
    /// `REX.W FF /0`
    Inc_Eq,
    /// `o16 FF /1`
    Dec_Ew,
    /// `o32 FF /1`
    Dec_Ed,
    /// `REX.W FF /1`
    Dec_Eq,
    /// `o16 FF /2`
    Call_Ew,
    /// `o32 FF /2`
    Call_Ed,
    /// `FF /2`
    Call_Eq,
    /// `o16 FF /3`
    Call_Eww,
    /// `o32 FF /3`
    Call_Edw,
    /// `REX.W FF /3`
    Call_Eqw,
    /// `o16 FF /4`
    Jmp_Ew,
    /// `o32 FF /4`
    Jmp_Ed,
    /// `FF /4`
    Jmp_Eq,
    /// `o16 FF /5`
    Jmp_Eww,
    /// `o32 FF /5`
    Jmp_Edw,
    /// `REX.W FF /5`
    Jmp_Eqw,
    /// `o16 FF /6`
    Push_Ew,
    /// `o32 FF /6`
    Push_Ed,
    /// `REX.W FF /6`
    Push_Eq,
    /// `o16 0F00 /0`
    Sldtw_Ew,
    /// `o32 0F00 /0`
    Sldtd_Ew,
    /// `REX.W 0F00 /0`
    Sldtq_Ew,
    /// `o16 0F00 /1`
    Strw_Ew,
    /// `o32 0F00 /1`
    Strd_Ew,
    /// `REX.W 0F00 /1`
    Strq_Ew,
    /// `o16 0F00 /2`
    Lldtw_Ew,
    /// `o32 0F00 /2`
    Lldtd_Ew,
    /// `REX.W 0F00 /2`
    Lldtq_Ew,
    /// `o16 0F00 /3`
    Ltrw_Ew,
    /// `o32 0F00 /3`
    Ltrd_Ew,
    /// `REX.W 0F00 /3`
    Ltrq_Ew,
    /// `o16 0F00 /4`
    Verrw_Ew,
    /// `o32 0F00 /4`
    Verrd_Ew,
    /// `REX.W 0F00 /4`
    Verrq_Ew,
    /// `o16 0F00 /5`
    Verww_Ew,
    /// `o32 0F00 /5`
    Verwd_Ew,
    /// `REX.W 0F00 /5`
    Verwq_Ew,
    /// `o16 0F01 /0`
    Sgdtw_Ms,
    /// `o32 0F01 /0`
    Sgdtd_Ms,
    /// `0F01 /0`
    Sgdtq_Ms,
    /// `o16 0F01 /1`
    Sidtw_Ms,
    /// `o32 0F01 /1`
    Sidtd_Ms,
    /// `0F01 /1`
    Sidtq_Ms,
    /// `o16 0F01 /2`
    Lgdtw_Ms,
    /// `o32 0F01 /2`
    Lgdtd_Ms,
    /// `0F01 /2`
    Lgdtq_Ms,
    /// `o16 0F01 /3`
    Lidtw_Ms,
    /// `o32 0F01 /3`
    Lidtd_Ms,
    /// `0F01 /3`
    Lidtq_Ms,
    /// `o16 0F01 /4`
    Smsww_Ew,
    /// `o32 0F01 /4`
    Smswd_Ew,
    /// `REX.W 0F01 /4`
    Smswq_Ew,
    /// `o16 0F01 /6`
    Lmsww_Ew,
    /// `o32 0F01 /6`
    Lmswd_Ew,
    /// `REX.W 0F01 /6`
    Lmswq_Ew,
    /// `0F01 /7`
    Invlpg_M,
    /// `0F01 C0`
    Enclv,
    /// `0F01 C1`
    Vmcall,
    /// `0F01 C2`
    Vmlaunch,
    /// `0F01 C3`
    Vmresume,
    /// `0F01 C4`
    Vmxoff,
    /// `a16 0F01 C8`
    Monitorw,
    /// `a32 0F01 C8`
    Monitord,
    /// `0F01 C8`
    Monitorq,
    /// `0F01 C9`
    Mwait,
    /// `0F01 CA`
    Clac,
    /// `0F01 CB`
    Stac,
    /// `0F01 CF`
    Encls,
    /// `0F01 D0`
    Xgetbv,
    /// `0F01 D1`
    Xsetbv,
    /// `0F01 D4`
    Vmfunc,
    /// `0F01 D5`
    Xend,
    /// `0F01 D6`
    Xtest,
    /// `0F01 D7`
    Enclu,
    /// `0F01 EE`
    Rdpkru,
    /// `0F01 EF`
    Wrpkru,
    /// `0F01 F8`
    Swapgs,
    /// `0F01 F9`
    Rdtscp,
    /// `o16 0F02`
    Lar_Gw_Ew,
    /// `o32 0F02`
    Lar_Gd_Ed,
    /// `REX.W 0F02`
    Lar_Gq_Eq,
    /// `o16 0F03`
    Lsl_Gw_Ew,
    /// `o32 0F03`
    Lsl_Gd_Ed,
    /// `REX.W 0F03`
    Lsl_Gq_Eq,
    /// `0F05`
    Syscall,
    /// `0F06`
    Clts,
    /// `0F07`
    Sysretd,
    /// `REX.W 0F07`
    Sysretq,
    /// `0F08`
    Invd,
    /// `0F09`
    Wbinvd,
    /// `0F0B`
    Ud2,
    /// `0F0D /1`
    Prefetchw_Mb,
    /// `0F0D /2`
    Prefetchwt1_Mb,
    /// `0F10`
    Movups_VX_WX,
    /// `VEX.128.0F.WIG 10`
    VEX_Vmovups_VX_WX,
    /// `VEX.256.0F.WIG 10`
    VEX_Vmovups_VY_WY,
    /// `EVEX.128.0F.W0 10`
    EVEX_Vmovups_VX_k1z_WX,
    /// `EVEX.256.0F.W0 10`
    EVEX_Vmovups_VY_k1z_WY,
    /// `EVEX.512.0F.W0 10`
    EVEX_Vmovups_VZ_k1z_WZ,
    /// `66 0F10`
    Movupd_VX_WX,
    /// `VEX.128.66.0F.WIG 10`
    VEX_Vmovupd_VX_WX,
    /// `VEX.256.66.0F.WIG 10`
    VEX_Vmovupd_VY_WY,
    /// `EVEX.128.66.0F.W1 10`
    EVEX_Vmovupd_VX_k1z_WX,
    /// `EVEX.256.66.0F.W1 10`
    EVEX_Vmovupd_VY_k1z_WY,
    /// `EVEX.512.66.0F.W1 10`
    EVEX_Vmovupd_VZ_k1z_WZ,
    /// `F3 0F10`
    Movss_VX_WX,
    /// `VEX.NDS.LIG.F3.0F.WIG 10`
    VEX_Vmovss_VX_HX_RX,
    /// `VEX.LIG.F3.0F.WIG 10`
    VEX_Vmovss_VX_M,
    /// `EVEX.NDS.LIG.F3.0F.W0 10`
    EVEX_Vmovss_VX_k1z_HX_RX,
    /// `EVEX.LIG.F3.0F.W0 10`
    EVEX_Vmovss_VX_k1z_M,
    /// `F2 0F10`
    Movsd_VX_WX,
    /// `VEX.NDS.LIG.F2.0F.WIG 10`
    VEX_Vmovsd_VX_HX_RX,
    /// `VEX.LIG.F2.0F.WIG 10`
    VEX_Vmovsd_VX_M,
    /// `EVEX.NDS.LIG.F2.0F.W1 10`
    EVEX_Vmovsd_VX_k1z_HX_RX,
    /// `EVEX.LIG.F2.0F.W1 10`
    EVEX_Vmovsd_VX_k1z_M,
    /// `0F11`
    Movups_WX_VX,
    /// `VEX.128.0F.WIG 11`
    VEX_Vmovups_WX_VX,
    /// `VEX.256.0F.WIG 11`
    VEX_Vmovups_WY_VY,
    /// `EVEX.128.0F.W0 11`
    EVEX_Vmovups_WX_k1z_VX,
    /// `EVEX.256.0F.W0 11`
    EVEX_Vmovups_WY_k1z_VY,
    /// `EVEX.512.0F.W0 11`
    EVEX_Vmovups_WZ_k1z_VZ,
    /// `66 0F11`
    Movupd_WX_VX,
    /// `VEX.128.66.0F.WIG 11`
    VEX_Vmovupd_WX_VX,
    /// `VEX.256.66.0F.WIG 11`
    VEX_Vmovupd_WY_VY,
    /// `EVEX.128.66.0F.W1 11`
    EVEX_Vmovupd_WX_k1z_VX,
    /// `EVEX.256.66.0F.W1 11`
    EVEX_Vmovupd_WY_k1z_VY,
    /// `EVEX.512.66.0F.W1 11`
    EVEX_Vmovupd_WZ_k1z_VZ,
    /// `F3 0F11`
    Movss_WX_VX,
    /// `VEX.NDS.LIG.F3.0F.WIG 11`
    VEX_Vmovss_RX_HX_VX,
    /// `VEX.LIG.F3.0F.WIG 11`
    VEX_Vmovss_M_VX,
    /// `EVEX.NDS.LIG.F3.0F.W0 11`
    EVEX_Vmovss_RX_k1z_HX_VX,
    /// `EVEX.LIG.F3.0F.W0 11`
    EVEX_Vmovss_M_k1_VX,
    /// `F2 0F11`
    Movsd_WX_VX,
    /// `VEX.NDS.LIG.F2.0F.WIG 11`
    VEX_Vmovsd_RX_HX_VX,
    /// `VEX.LIG.F2.0F.WIG 11`
    VEX_Vmovsd_M_VX,
    /// `EVEX.NDS.LIG.F2.0F.W1 11`
    EVEX_Vmovsd_RX_k1z_HX_VX,
    /// `EVEX.LIG.F2.0F.W1 11`
    EVEX_Vmovsd_M_k1_VX,
    /// `0F12`
    Movlps_VX_M,
    /// `0F12` (mod = 11)
    Movhlps_VX_RX,
    /// `VEX.NDS.128.0F.WIG 12`
    VEX_Vmovlps_VX_HX_M,
    /// `VEX.NDS.128.0F.WIG 12`
    VEX_Vmovhlps_VX_HX_RX,
    /// `66 0F12`
    Movlpd_VX_M,
    /// `VEX.NDS.128.66.0F.WIG 12`
    VEX_Vmovlpd_VX_HX_M,
    /// `F3 0F12`
    Movsldup_VX_WX,
    /// `VEX.128.F3.0F.WIG 12`
    VEX_Vmovsldup_VX_WX,
    /// `VEX.256.F3.0F.WIG 12`
    VEX_Vmovsldup_VY_WY,
    /// `F2 0F12`
    Movddup_VX_WX,
    /// `VEX.128.F2.0F.WIG 12`
    VEX_Vmovddup_VX_WX,
    /// `VEX.256.F2.0F.WIG 12`
    VEX_Vmovddup_VY_WY,
    /// `0F13`
    Movlps_M_VX,
    /// `VEX.128.0F.WIG 13`
    VEX_Vmovlps_M_VX,
    /// `66 0F13`
    Movlpd_M_VX,
    /// `VEX.128.66.0F.WIG 13`
    VEX_Vmovlpd_M_VX,
    /// `0F14`
    Unpcklps_VX_WX,
    /// `VEX.NDS.128.0F.WIG 14`
    VEX_Vunpcklps_VX_HX_WX,
    /// `VEX.NDS.256.0F.WIG 14`
    VEX_Vunpcklps_VY_HY_WY,
    /// `EVEX.NDS.128.0F.W0 14`
    EVEX_Vunpcklps_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.0F.W0 14`
    EVEX_Vunpcklps_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.0F.W0 14`
    EVEX_Vunpcklps_VZ_k1z_HZ_WZ_b,
    /// `66 0F14`
    Unpcklpd_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 14`
    VEX_Vunpcklpd_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 14`
    VEX_Vunpcklpd_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W1 14`
    EVEX_Vunpcklpd_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W1 14`
    EVEX_Vunpcklpd_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W1 14`
    EVEX_Vunpcklpd_VZ_k1z_HZ_WZ_b,
    /// `0F18 /0`
    Prefetchnta_Mb,
    /// `0F18 /1`
    Prefetcht0_Mb,
    /// `0F18 /2`
    Prefetcht1_Mb,
    /// `0F18 /3`
    Prefetcht2_Mb,
    /// `F3 0F1E /1` (mod = 11)
    Rdsspd_Rd,
    /// `F3 REX.W 0F1E /1` (mod = 11)
    Rdsspq_Rq,
    /// `F3 0F1E FA`
    Endbr64,
    /// `F3 0F1E FB`
    Endbr32,
    /// `o16 0F1F /0`
    Nop_Ew,
    /// `o32 0F1F /0`
    Nop_Ed,
    /// `REX.W 0F1F /0`
    Nop_Eq,
    /// `0F28`
    Movaps_VX_WX,
    /// `VEX.128.0F.WIG 28`
    VEX_Vmovaps_VX_WX,
    /// `VEX.256.0F.WIG 28`
    VEX_Vmovaps_VY_WY,
    /// `EVEX.128.0F.W0 28`
    EVEX_Vmovaps_VX_k1z_WX,
    /// `EVEX.256.0F.W0 28`
    EVEX_Vmovaps_VY_k1z_WY,
    /// `EVEX.512.0F.W0 28`
    EVEX_Vmovaps_VZ_k1z_WZ,
    /// `66 0F28`
    Movapd_VX_WX,
    /// `VEX.128.66.0F.WIG 28`
    VEX_Vmovapd_VX_WX,
    /// `VEX.256.66.0F.WIG 28`
    VEX_Vmovapd_VY_WY,
    /// `EVEX.128.66.0F.W1 28`
    EVEX_Vmovapd_VX_k1z_WX,
    /// `EVEX.256.66.0F.W1 28`
    EVEX_Vmovapd_VY_k1z_WY,
    /// `EVEX.512.66.0F.W1 28`
    EVEX_Vmovapd_VZ_k1z_WZ,
    /// `0F29`
    Movaps_WX_VX,
    /// `VEX.128.0F.WIG 29`
    VEX_Vmovaps_WX_VX,
    /// `VEX.256.0F.WIG 29`
    VEX_Vmovaps_WY_VY,
    /// `EVEX.128.0F.W0 29`
    EVEX_Vmovaps_WX_k1z_VX,
    /// `EVEX.256.0F.W0 29`
    EVEX_Vmovaps_WY_k1z_VY,
    /// `EVEX.512.0F.W0 29`
    EVEX_Vmovaps_WZ_k1z_VZ,
    /// `66 0F29`
    Movapd_WX_VX,
    /// `VEX.128.66.0F.WIG 29`
    VEX_Vmovapd_WX_VX,
    /// `VEX.256.66.0F.WIG 29`
    VEX_Vmovapd_WY_VY,
    /// `EVEX.128.66.0F.W1 29`
    EVEX_Vmovapd_WX_k1z_VX,
    /// `EVEX.256.66.0F.W1 29`
    EVEX_Vmovapd_WY_k1z_VY,
    /// `EVEX.512.66.0F.W1 29`
    EVEX_Vmovapd_WZ_k1z_VZ,
    /// `0F2A`
    Cvtpi2ps_VX_Q,
    /// `66 0F2A`
    Cvtpi2pd_VX_Q,
    /// `F3 0F2A`
    Cvtsi2ss_VX_Ed,
    /// `F3 REX.W 0F2A`
    Cvtsi2ss_VX_Eq,
    /// `VEX.NDS.LIG.F3.0F.W0 2A`
    VEX_Vcvtsi2ss_VX_HX_Ed,
    /// `VEX.NDS.LIG.F3.0F.W1 2A`
    VEX_Vcvtsi2ss_VX_HX_Eq,
    /// `EVEX.NDS.LIG.F3.0F.W0 2A`
    EVEX_Vcvtsi2ss_VX_HX_Ed_er,
    /// `EVEX.NDS.LIG.F3.0F.W1 2A`
    EVEX_Vcvtsi2ss_VX_HX_Eq_er,
    /// `F2 0F2A`
    Cvtsi2sd_VX_Ed,
    /// `F2 REX.W 0F2A`
    Cvtsi2sd_VX_Eq,
    /// `VEX.NDS.LIG.F2.0F.W0 2A`
    VEX_Vcvtsi2sd_VX_HX_Ed,
    /// `VEX.NDS.LIG.F2.0F.W1 2A`
    VEX_Vcvtsi2sd_VX_HX_Eq,
    /// `EVEX.NDS.LIG.F2.0F.W0 2A`
    EVEX_Vcvtsi2sd_VX_HX_Ed,
    /// `EVEX.NDS.LIG.F2.0F.W1 2A`
    EVEX_Vcvtsi2sd_VX_HX_Eq_er,
    /// `0F2C`
    Cvttps2pi_P_WX,
    /// `66 0F2C`
    Cvttpd2pi_P_WX,
    /// `F3 0F2C`
    Cvttss2si_Gd_WX,
    /// `F3 REX.W 0F2C`
    Cvttss2si_Gq_WX,
    /// `VEX.LIG.F3.0F.W0 2C`
    VEX_Vcvttss2si_Gd_WX,
    /// `VEX.LIG.F3.0F.W1 2C`
    VEX_Vcvttss2si_Gq_WX,
    /// `EVEX.LIG.F3.0F.W0 2C`
    EVEX_Vcvttss2si_Gd_WX_sae,
    /// `EVEX.LIG.F3.0F.W1 2C`
    EVEX_Vcvttss2si_Gq_WX_sae,
    /// `F2 0F2C`
    Cvttsd2si_Gd_WX,
    /// `F2 REX.W 0F2C`
    Cvttsd2si_Gq_WX,
    /// `VEX.LIG.F2.0F.W0 2C`
    VEX_Vcvttsd2si_Gd_WX,
    /// `VEX.LIG.F2.0F.W1 2C`
    VEX_Vcvttsd2si_Gq_WX,
    /// `EVEX.LIG.F2.0F.W0 2C`
    EVEX_Vcvttsd2si_Gd_WX_sae,
    /// `EVEX.LIG.F2.0F.W1 2C`
    EVEX_Vcvttsd2si_Gq_WX_sae,
    /// `0F2D`
    Cvtps2pi_P_WX,
    /// `66 0F2D`
    Cvtpd2pi_P_WX,
    /// `F3 0F2D`
    Cvtss2si_Gd_WX,
    /// `F3 REX.W 0F2D`
    Cvtss2si_Gq_WX,
    /// `VEX.LIG.F3.0F.W0 2D`
    VEX_Vcvtss2si_Gd_WX,
    /// `VEX.LIG.F3.0F.W1 2D`
    VEX_Vcvtss2si_Gq_WX,
    /// `EVEX.LIG.F3.0F.W0 2D`
    EVEX_Vcvtss2si_Gd_WX_er,
    /// `EVEX.LIG.F3.0F.W1 2D`
    EVEX_Vcvtss2si_Gq_WX_er,
    /// `F2 0F2D`
    Cvtsd2si_Gd_WX,
    /// `F2 REX.W 0F2D`
    Cvtsd2si_Gq_WX,
    /// `VEX.LIG.F2.0F.W0 2D`
    VEX_Vcvtsd2si_Gd_WX,
    /// `VEX.LIG.F2.0F.W1 2D`
    VEX_Vcvtsd2si_Gq_WX,
    /// `EVEX.LIG.F2.0F.W0 2D`
    EVEX_Vcvtsd2si_Gd_WX_er,
    /// `EVEX.LIG.F2.0F.W1 2D`
    EVEX_Vcvtsd2si_Gq_WX_er,
    /// `0F2E`
    Ucomiss_VX_WX,
    /// `VEX.LIG.0F.WIG 2E`
    VEX_Vucomiss_VX_WX,
    /// `EVEX.LIG.0F.W0 2E`
    EVEX_Vucomiss_VX_WX_sae,
    /// `66 0F2E`
    Ucomisd_VX_WX,
    /// `VEX.LIG.66.0F.WIG 2E`
    VEX_Vucomisd_VX_WX,
    /// `EVEX.LIG.66.0F.W1 2E`
    EVEX_Vucomisd_VX_WX_sae,
    /// `0F2F`
    Comiss_VX_WX,
    /// `66 0F2F`
    Comisd_VX_WX,
    /// `VEX.LIG.0F.WIG 2F`
    VEX_Vcomiss_VX_WX,
    /// `VEX.LIG.66.0F.WIG 2F`
    VEX_Vcomisd_VX_WX,
    /// `EVEX.LIG.0F.W0 2F`
    EVEX_Vcomiss_VX_WX_sae,
    /// `EVEX.LIG.66.0F.W1 2F`
    EVEX_Vcomisd_VX_WX_sae,
    /// `0F31`
    Rdtsc,
    /// `o16 0F40`
    Cmovo_Gw_Ew,
    /// `o32 0F40`
    Cmovo_Gd_Ed,
    /// `REX.W 0F40`
    Cmovo_Gq_Eq,
    /// `o16 0F41`
    Cmovno_Gw_Ew,
    /// `o32 0F41`
    Cmovno_Gd_Ed,
    /// `REX.W 0F41`
    Cmovno_Gq_Eq,
    /// `o16 0F42`
    Cmovb_Gw_Ew,
    /// `o32 0F42`
    Cmovb_Gd_Ed,
    /// `REX.W 0F42`
    Cmovb_Gq_Eq,
    /// `o16 0F43`
    Cmovae_Gw_Ew,
    /// `o32 0F43`
    Cmovae_Gd_Ed,
    /// `REX.W 0F43`
    Cmovae_Gq_Eq,
    /// `o16 0F44`
    Cmove_Gw_Ew,
    /// `o32 0F44`
    Cmove_Gd_Ed,
    /// `REX.W 0F44`
    Cmove_Gq_Eq,
    /// `o16 0F45`
    Cmovne_Gw_Ew,
    /// `o32 0F45`
    Cmovne_Gd_Ed,
    /// `REX.W 0F45`
    Cmovne_Gq_Eq,
    /// `o16 0F46`
    Cmovbe_Gw_Ew,
    /// `o32 0F46`
    Cmovbe_Gd_Ed,
    /// `REX.W 0F46`
    Cmovbe_Gq_Eq,
    /// `o16 0F47`
    Cmova_Gw_Ew,
    /// `o32 0F47`
    Cmova_Gd_Ed,
    /// `REX.W 0F47`
    Cmova_Gq_Eq,
    /// `o16 0F48`
    Cmovs_Gw_Ew,
    /// `o32 0F48`
    Cmovs_Gd_Ed,
    /// `REX.W 0F48`
    Cmovs_Gq_Eq,
    /// `o16 0F49`
    Cmovns_Gw_Ew,
    /// `o32 0F49`
    Cmovns_Gd_Ed,
    /// `REX.W 0F49`
    Cmovns_Gq_Eq,
    /// `o16 0F4A`
    Cmovp_Gw_Ew,
    /// `o32 0F4A`
    Cmovp_Gd_Ed,
    /// `REX.W 0F4A`
    Cmovp_Gq_Eq,
    /// `o16 0F4B`
    Cmovnp_Gw_Ew,
    /// `o32 0F4B`
    Cmovnp_Gd_Ed,
    /// `REX.W 0F4B`
    Cmovnp_Gq_Eq,
    /// `o16 0F4C`
    Cmovl_Gw_Ew,
    /// `o32 0F4C`
    Cmovl_Gd_Ed,
    /// `REX.W 0F4C`
    Cmovl_Gq_Eq,
    /// `o16 0F4D`
    Cmovge_Gw_Ew,
    /// `o32 0F4D`
    Cmovge_Gd_Ed,
    /// `REX.W 0F4D`
    Cmovge_Gq_Eq,
    /// `o16 0F4E`
    Cmovle_Gw_Ew,
    /// `o32 0F4E`
    Cmovle_Gd_Ed,
    /// `REX.W 0F4E`
    Cmovle_Gq_Eq,
    /// `o16 0F4F`
    Cmovg_Gw_Ew,
    /// `o32 0F4F`
    Cmovg_Gd_Ed,
    /// `REX.W 0F4F`
    Cmovg_Gq_Eq,
    /// `VEX.NDS.L1.0F.W0 41`
    VEX_Kandw_VK_HK_RK,
    /// `VEX.NDS.L1.0F.W1 41`
    VEX_Kandq_VK_HK_RK,
    /// `VEX.NDS.L1.66.0F.W0 41`
    VEX_Kandb_VK_HK_RK,
    /// `VEX.NDS.L1.66.0F.W1 41`
    VEX_Kandd_VK_HK_RK,
    /// `VEX.NDS.L1.0F.W0 42`
    VEX_Kandnw_VK_HK_RK,
    /// `VEX.NDS.L1.0F.W1 42`
    VEX_Kandnq_VK_HK_RK,
    /// `VEX.NDS.L1.66.0F.W0 42`
    VEX_Kandnb_VK_HK_RK,
    /// `VEX.NDS.L1.66.0F.W1 42`
    VEX_Kandnd_VK_HK_RK,
    /// `VEX.L0.0F.W0 44`
    VEX_Knotw_VK_RK,
    /// `VEX.L0.0F.W1 44`
    VEX_Knotq_VK_RK,
    /// `VEX.L0.66.0F.W0 44`
    VEX_Knotb_VK_RK,
    /// `VEX.L0.66.0F.W1 44`
    VEX_Knotd_VK_RK,
    /// `VEX.NDS.L1.0F.W0 45`
    VEX_Korw_VK_HK_RK,
    /// `VEX.NDS.L1.0F.W1 45`
    VEX_Korq_VK_HK_RK,
    /// `VEX.NDS.L1.66.0F.W0 45`
    VEX_Korb_VK_HK_RK,
    /// `VEX.NDS.L1.66.0F.W1 45`
    VEX_Kord_VK_HK_RK,
    /// `VEX.NDS.L1.0F.W0 46`
    VEX_Kxnorw_VK_HK_RK,
    /// `VEX.NDS.L1.0F.W1 46`
    VEX_Kxnorq_VK_HK_RK,
    /// `VEX.NDS.L1.66.0F.W0 46`
    VEX_Kxnorb_VK_HK_RK,
    /// `VEX.NDS.L1.66.0F.W1 46`
    VEX_Kxnord_VK_HK_RK,
    /// `VEX.NDS.L1.0F.W0 47`
    VEX_Kxorw_VK_HK_RK,
    /// `VEX.NDS.L1.0F.W1 47`
    VEX_Kxorq_VK_HK_RK,
    /// `VEX.NDS.L1.66.0F.W0 47`
    VEX_Kxorb_VK_HK_RK,
    /// `VEX.NDS.L1.66.0F.W1 47`
    VEX_Kxord_VK_HK_RK,
    /// `VEX.NDS.L1.0F.W0 4A`
    VEX_Kaddw_VK_HK_RK,
    /// `VEX.NDS.L1.0F.W1 4A`
    VEX_Kaddq_VK_HK_RK,
    /// `VEX.NDS.L1.66.0F.W0 4A`
    VEX_Kaddb_VK_HK_RK,
    /// `VEX.NDS.L1.66.0F.W1 4A`
    VEX_Kaddd_VK_HK_RK,
    /// `VEX.NDS.L1.0F.W0 4B`
    VEX_Kunpckwd_VK_HK_RK,
    /// `VEX.NDS.L1.0F.W1 4B`
    VEX_Kunpckdq_VK_HK_RK,
    /// `VEX.NDS.L1.66.0F.W0 4B`
    VEX_Kunpckbw_VK_HK_RK,
    /// `0F51`
    Sqrtps_VX_WX,
    /// `VEX.128.0F.WIG 51`
    VEX_Vsqrtps_VX_WX,
    /// `VEX.256.0F.WIG 51`
    VEX_Vsqrtps_VY_WY,
    /// `EVEX.NDS.128.0F.W0 51`
    EVEX_Vsqrtps_VX_k1z_WX_b,
    /// `EVEX.NDS.256.0F.W0 51`
    EVEX_Vsqrtps_VY_k1z_WY_b,
    /// `EVEX.NDS.512.0F.W0 51`
    EVEX_Vsqrtps_VZ_k1z_WZ_er_b,
    /// `66 0F51`
    Sqrtpd_VX_WX,
    /// `VEX.128.66.0F.WIG 51`
    VEX_Vsqrtpd_VX_WX,
    /// `VEX.256.66.0F.WIG 51`
    VEX_Vsqrtpd_VY_WY,
    /// `EVEX.128.66.0F.W1 51`
    EVEX_Vsqrtpd_VX_k1z_WX_b,
    /// `EVEX.256.66.0F.W1 51`
    EVEX_Vsqrtpd_VY_k1z_WY_b,
    /// `EVEX.512.66.0F.W1 51`
    EVEX_Vsqrtpd_VZ_k1z_WZ_er_b,
    /// `F3 0F51`
    Sqrtss_VX_WX,
    /// `VEX.NDS.LIG.F3.0F.WIG 51`
    VEX_Vsqrtss_VX_HX_WX,
    /// `EVEX.NDS.LIG.F3.0F.W0 51`
    EVEX_Vsqrtss_VX_k1z_HX_WX_er,
    /// `F2 0F51`
    Sqrtsd_VX_WX,
    /// `VEX.NDS.LIG.F2.0F.WIG 51`
    VEX_Vsqrtsd_VX_HX_WX,
    /// `EVEX.NDS.LIG.F2.0F.W1 51`
    EVEX_Vsqrtsd_VX_k1z_HX_WX_er,
    /// `0F54`
    Andps_VX_WX,
    /// `VEX.NDS.128.0F.WIG 54`
    VEX_Vandps_VX_HX_WX,
    /// `VEX.NDS.256.0F.WIG 54`
    VEX_Vandps_VY_HY_WY,
    /// `EVEX.NDS.128.0F.W0 54`
    EVEX_Vandps_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.0F.W0 54`
    EVEX_Vandps_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.0F.W0 54`
    EVEX_Vandps_VZ_k1z_HZ_WZ_b,
    /// `66 0F54`
    Andpd_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 54`
    VEX_Vandpd_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 54`
    VEX_Vandpd_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W1 54`
    EVEX_Vandpd_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W1 54`
    EVEX_Vandpd_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W1 54`
    EVEX_Vandpd_VZ_k1z_HZ_WZ_b,
    /// `0F55`
    Andnps_VX_WX,
    /// `VEX.NDS.128.0F.WIG 55`
    VEX_Vandnps_VX_HX_WX,
    /// `VEX.NDS.256.0F.WIG 55`
    VEX_Vandnps_VY_HY_WY,
    /// `EVEX.NDS.128.0F.W0 55`
    EVEX_Vandnps_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.0F.W0 55`
    EVEX_Vandnps_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.0F.W0 55`
    EVEX_Vandnps_VZ_k1z_HZ_WZ_b,
    /// `66 0F55`
    Andnpd_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 55`
    VEX_Vandnpd_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 55`
    VEX_Vandnpd_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W1 55`
    EVEX_Vandnpd_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W1 55`
    EVEX_Vandnpd_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W1 55`
    EVEX_Vandnpd_VZ_k1z_HZ_WZ_b,
    /// `0F56`
    Orps_VX_WX,
    /// `VEX.NDS.128.0F.WIG 56`
    VEX_Vorps_VX_HX_WX,
    /// `VEX.NDS.256.0F.WIG 56`
    VEX_Vorps_VY_HY_WY,
    /// `EVEX.NDS.128.0F.W0 56`
    EVEX_Vorps_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.0F.W0 56`
    EVEX_Vorps_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.0F.W0 56`
    EVEX_Vorps_VZ_k1z_HZ_WZ_b,
    /// `66 0F56`
    Orpd_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 56`
    VEX_Vorpd_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 56`
    VEX_Vorpd_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W1 56`
    EVEX_Vorpd_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W1 56`
    EVEX_Vorpd_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W1 56`
    EVEX_Vorpd_VZ_k1z_HZ_WZ_b,
    /// `0F57`
    Xorps_VX_WX,
    /// `VEX.NDS.128.0F.WIG 57`
    VEX_Vxorps_VX_HX_WX,
    /// `VEX.NDS.256.0F.WIG 57`
    VEX_Vxorps_VY_HY_WY,
    /// `EVEX.NDS.128.0F.W0 57`
    EVEX_Vxorps_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.0F.W0 57`
    EVEX_Vxorps_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.0F.W0 57`
    EVEX_Vxorps_VZ_k1z_HZ_WZ_b,
    /// `66 0F57`
    Xorpd_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 57`
    VEX_Vxorpd_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 57`
    VEX_Vxorpd_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W1 57`
    EVEX_Vxorpd_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W1 57`
    EVEX_Vxorpd_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W1 57`
    EVEX_Vxorpd_VZ_k1z_HZ_WZ_b,
    /// `0F58`
    Addps_VX_WX,
    /// `VEX.NDS.128.0F.WIG 58`
    VEX_Vaddps_VX_HX_WX,
    /// `VEX.NDS.256.0F.WIG 58`
    VEX_Vaddps_VY_HY_WY,
    /// `EVEX.NDS.128.0F.W0 58`
    EVEX_Vaddps_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.0F.W0 58`
    EVEX_Vaddps_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.0F.W0 58`
    EVEX_Vaddps_VZ_k1z_HZ_WZ_er_b,
    /// `66 0F58`
    Addpd_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 58`
    VEX_Vaddpd_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 58`
    VEX_Vaddpd_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W1 58`
    EVEX_Vaddpd_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W1 58`
    EVEX_Vaddpd_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W1 58`
    EVEX_Vaddpd_VZ_k1z_HZ_WZ_er_b,
    /// `F3 0F58`
    Addss_VX_WX,
    /// `VEX.NDS.LIG.F3.0F.WIG 58`
    VEX_Vaddss_VX_HX_WX,
    /// `EVEX.NDS.LIG.F3.0F.W0 58`
    EVEX_Vaddss_VX_k1z_HX_WX_er,
    /// `F2 0F58`
    Addsd_VX_WX,
    /// `VEX.NDS.LIG.F2.0F.WIG 58`
    VEX_Vaddsd_VX_HX_WX,
    /// `EVEX.NDS.LIG.F2.0F.W1 58`
    EVEX_Vaddsd_VX_k1z_HX_WX_er,
    /// `0F59`
    Mulps_VX_WX,
    /// `VEX.NDS.128.0F.WIG 59`
    VEX_Vmulps_VX_HX_WX,
    /// `VEX.NDS.256.0F.WIG 59`
    VEX_Vmulps_VY_HY_WY,
    /// `EVEX.NDS.128.0F.W0 59`
    EVEX_Vmulps_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.0F.W0 59`
    EVEX_Vmulps_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.0F.W0 59`
    EVEX_Vmulps_VZ_k1z_HZ_WZ_er_b,
    /// `66 0F59`
    Mulpd_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 59`
    VEX_Vmulpd_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 59`
    VEX_Vmulpd_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W1 59`
    EVEX_Vmulpd_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W1 59`
    EVEX_Vmulpd_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W1 59`
    EVEX_Vmulpd_VZ_k1z_HZ_WZ_er_b,
    /// `F3 0F59`
    Mulss_VX_WX,
    /// `VEX.NDS.LIG.F3.0F.WIG 59`
    VEX_Vmulss_VX_HX_WX,
    /// `EVEX.NDS.LIG.F3.0F.W0 59`
    EVEX_Vmulss_VX_k1z_HX_WX_er,
    /// `F2 0F59`
    Mulsd_VX_WX,
    /// `VEX.NDS.LIG.F2.0F.WIG 59`
    VEX_Vmulsd_VX_HX_WX,
    /// `EVEX.NDS.LIG.F2.0F.W1 59`
    EVEX_Vmulsd_VX_k1z_HX_WX_er,
    /// `0F5C`
    Subps_VX_WX,
    /// `VEX.NDS.128.0F.WIG 5C`
    VEX_Vsubps_VX_HX_WX,
    /// `VEX.NDS.256.0F.WIG 5C`
    VEX_Vsubps_VY_HY_WY,
    /// `EVEX.NDS.128.0F.W0 5C`
    EVEX_Vsubps_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.0F.W0 5C`
    EVEX_Vsubps_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.0F.W0 5C`
    EVEX_Vsubps_VZ_k1z_HZ_WZ_er_b,
    /// `66 0F5C`
    Subpd_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 5C`
    VEX_Vsubpd_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 5C`
    VEX_Vsubpd_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W1 5C`
    EVEX_Vsubpd_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W1 5C`
    EVEX_Vsubpd_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W1 5C`
    EVEX_Vsubpd_VZ_k1z_HZ_WZ_er_b,
    /// `F3 0F5C`
    Subss_VX_WX,
    /// `VEX.NDS.LIG.F3.0F.WIG 5C`
    VEX_Vsubss_VX_HX_WX,
    /// `EVEX.NDS.LIG.F3.0F.W0 5C`
    EVEX_Vsubss_VX_k1z_HX_WX_er,
    /// `F2 0F5C`
    Subsd_VX_WX,
    /// `VEX.NDS.LIG.F2.0F.WIG 5C`
    VEX_Vsubsd_VX_HX_WX,
    /// `EVEX.NDS.LIG.F2.0F.W1 5C`
    EVEX_Vsubsd_VX_k1z_HX_WX_er,
    /// `0F5D`
    Minps_VX_WX,
    /// `VEX.NDS.128.0F.WIG 5D`
    VEX_Vminps_VX_HX_WX,
    /// `VEX.NDS.256.0F.WIG 5D`
    VEX_Vminps_VY_HY_WY,
    /// `EVEX.NDS.128.0F.W0 5D`
    EVEX_Vminps_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.0F.W0 5D`
    EVEX_Vminps_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.0F.W0 5D`
    EVEX_Vminps_VZ_k1z_HZ_WZ_sae_b,
    /// `66 0F5D`
    Minpd_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 5D`
    VEX_Vminpd_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 5D`
    VEX_Vminpd_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W1 5D`
    EVEX_Vminpd_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W1 5D`
    EVEX_Vminpd_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W1 5D`
    EVEX_Vminpd_VZ_k1z_HZ_WZ_sae_b,
    /// `F3 0F5D`
    Minss_VX_WX,
    /// `VEX.NDS.LIG.F3.0F.WIG 5D`
    VEX_Vminss_VX_HX_WX,
    /// `EVEX.NDS.LIG.F3.0F.W0 5D`
    EVEX_Vminss_VX_k1z_HX_WX_sae,
    /// `F2 0F5D`
    Minsd_VX_WX,
    /// `VEX.NDS.LIG.F2.0F.WIG 5D`
    VEX_Vminsd_VX_HX_WX,
    /// `EVEX.NDS.LIG.F2.0F.W1 5D`
    EVEX_Vminsd_VX_k1z_HX_WX_sae,
    /// `0F5E`
    Divps_VX_WX,
    /// `VEX.NDS.128.0F.WIG 5E`
    VEX_Vdivps_VX_HX_WX,
    /// `VEX.NDS.256.0F.WIG 5E`
    VEX_Vdivps_VY_HY_WY,
    /// `EVEX.NDS.128.0F.W0 5E`
    EVEX_Vdivps_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.0F.W0 5E`
    EVEX_Vdivps_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.0F.W0 5E`
    EVEX_Vdivps_VZ_k1z_HZ_WZ_er_b,
    /// `66 0F5E`
    Divpd_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 5E`
    VEX_Vdivpd_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 5E`
    VEX_Vdivpd_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W1 5E`
    EVEX_Vdivpd_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W1 5E`
    EVEX_Vdivpd_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W1 5E`
    EVEX_Vdivpd_VZ_k1z_HZ_WZ_er_b,
    /// `F3 0F5E`
    Divss_VX_WX,
    /// `VEX.NDS.LIG.F3.0F.WIG 5E`
    VEX_Vdivss_VX_HX_WX,
    /// `EVEX.NDS.LIG.F3.0F.W0 5E`
    EVEX_Vdivss_VX_k1z_HX_WX_er,
    /// `F2 0F5E`
    Divsd_VX_WX,
    /// `VEX.NDS.LIG.F2.0F.WIG 5E`
    VEX_Vdivsd_VX_HX_WX,
    /// `EVEX.NDS.LIG.F2.0F.W1 5E`
    EVEX_Vdivsd_VX_k1z_HX_WX_er,
    /// `0F5F`
    Maxps_VX_WX,
    /// `VEX.NDS.128.0F.WIG 5F`
    VEX_Vmaxps_VX_HX_WX,
    /// `VEX.NDS.256.0F.WIG 5F`
    VEX_Vmaxps_VY_HY_WY,
    /// `EVEX.NDS.128.0F.W0 5F`
    EVEX_Vmaxps_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.0F.W0 5F`
    EVEX_Vmaxps_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.0F.W0 5F`
    EVEX_Vmaxps_VZ_k1z_HZ_WZ_sae_b,
    /// `66 0F5F`
    Maxpd_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 5F`
    VEX_Vmaxpd_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 5F`
    VEX_Vmaxpd_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W1 5F`
    EVEX_Vmaxpd_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W1 5F`
    EVEX_Vmaxpd_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W1 5F`
    EVEX_Vmaxpd_VZ_k1z_HZ_WZ_sae_b,
    /// `F3 0F5F`
    Maxss_VX_WX,
    /// `VEX.NDS.LIG.F3.0F.WIG 5F`
    VEX_Vmaxss_VX_HX_WX,
    /// `EVEX.NDS.LIG.F3.0F.W0 5F`
    EVEX_Vmaxss_VX_k1z_HX_WX_sae,
    /// `F2 0F5F`
    Maxsd_VX_WX,
    /// `VEX.NDS.LIG.F2.0F.WIG 5F`
    VEX_Vmaxsd_VX_HX_WX,
    /// `EVEX.NDS.LIG.F2.0F.W1 5F`
    EVEX_Vmaxsd_VX_k1z_HX_WX_sae,
    /// `0F60`
    Punpcklbw_P_Q,
    /// `66 0F60`
    Punpcklbw_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 60`
    VEX_Vpunpcklbw_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 60`
    VEX_Vpunpcklbw_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.WIG 60`
    EVEX_Vpunpcklbw_VX_k1z_HX_WX,
    /// `EVEX.NDS.256.66.0F.WIG 60`
    EVEX_Vpunpcklbw_VY_k1z_HY_WY,
    /// `EVEX.NDS.512.66.0F.WIG 60`
    EVEX_Vpunpcklbw_VZ_k1z_HZ_WZ,
    /// `0F61`
    Punpcklwd_P_Q,
    /// `66 0F61`
    Punpcklwd_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 61`
    VEX_Vpunpcklwd_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 61`
    VEX_Vpunpcklwd_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.WIG 61`
    EVEX_Vpunpcklwd_VX_k1z_HX_WX,
    /// `EVEX.NDS.256.66.0F.WIG 61`
    EVEX_Vpunpcklwd_VY_k1z_HY_WY,
    /// `EVEX.NDS.512.66.0F.WIG 61`
    EVEX_Vpunpcklwd_VZ_k1z_HZ_WZ,
    /// `0F62`
    Punpckldq_P_Q,
    /// `66 0F62`
    Punpckldq_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 62`
    VEX_Vpunpckldq_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 62`
    VEX_Vpunpckldq_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W0 62`
    EVEX_Vpunpckldq_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W0 62`
    EVEX_Vpunpckldq_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W0 62`
    EVEX_Vpunpckldq_VZ_k1z_HZ_WZ_b,
    /// `0F63`
    Packsswb_P_Q,
    /// `66 0F63`
    Packsswb_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 63`
    VEX_Vpacksswb_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 63`
    VEX_Vpacksswb_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.WIG 63`
    EVEX_Vpacksswb_VX_k1z_HX_WX,
    /// `EVEX.NDS.256.66.0F.WIG 63`
    EVEX_Vpacksswb_VY_k1z_HY_WY,
    /// `EVEX.NDS.512.66.0F.WIG 63`
    EVEX_Vpacksswb_VZ_k1z_HZ_WZ,
    /// `0F64`
    Pcmpgtb_P_Q,
    /// `66 0F64`
    Pcmpgtb_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 64`
    VEX_Vpcmpgtb_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 64`
    VEX_Vpcmpgtb_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.WIG 64`
    EVEX_Vpcmpgtb_VK_k1_HX_WX,
    /// `EVEX.NDS.256.66.0F.WIG 64`
    EVEX_Vpcmpgtb_VK_k1_HY_WY,
    /// `EVEX.NDS.512.66.0F.WIG 64`
    EVEX_Vpcmpgtb_VK_k1_HZ_WZ,
    /// `0F65`
    Pcmpgtw_P_Q,
    /// `66 0F65`
    Pcmpgtw_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 65`
    VEX_Vpcmpgtw_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 65`
    VEX_Vpcmpgtw_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.WIG 65`
    EVEX_Vpcmpgtw_VK_k1_HX_WX,
    /// `EVEX.NDS.256.66.0F.WIG 65`
    EVEX_Vpcmpgtw_VK_k1_HY_WY,
    /// `EVEX.NDS.512.66.0F.WIG 65`
    EVEX_Vpcmpgtw_VK_k1_HZ_WZ,
    /// `0F66`
    Pcmpgtd_P_Q,
    /// `66 0F66`
    Pcmpgtd_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 66`
    VEX_Vpcmpgtd_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 66`
    VEX_Vpcmpgtd_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W0 66`
    EVEX_Vpcmpgtd_VK_k1_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W0 66`
    EVEX_Vpcmpgtd_VK_k1_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W0 66`
    EVEX_Vpcmpgtd_VK_k1_HZ_WZ_b,
    /// `0F67`
    Packuswb_P_Q,
    /// `66 0F67`
    Packuswb_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 67`
    VEX_Vpackuswb_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 67`
    VEX_Vpackuswb_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.WIG 67`
    EVEX_Vpackuswb_VX_k1z_HX_WX,
    /// `EVEX.NDS.256.66.0F.WIG 67`
    EVEX_Vpackuswb_VY_k1z_HY_WY,
    /// `EVEX.NDS.512.66.0F.WIG 67`
    EVEX_Vpackuswb_VZ_k1z_HZ_WZ,
    /// `0F68`
    Punpckhbw_P_Q,
    /// `66 0F68`
    Punpckhbw_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 68`
    VEX_Vpunpckhbw_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 68`
    VEX_Vpunpckhbw_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.WIG 68`
    EVEX_Vpunpckhbw_VX_k1z_HX_WX,
    /// `EVEX.NDS.256.66.0F.WIG 68`
    EVEX_Vpunpckhbw_VY_k1z_HY_WY,
    /// `EVEX.NDS.512.66.0F.WIG 68`
    EVEX_Vpunpckhbw_VZ_k1z_HZ_WZ,
    /// `0F69`
    Punpckhwd_P_Q,
    /// `66 0F69`
    Punpckhwd_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 69`
    VEX_Vpunpckhwd_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 69`
    VEX_Vpunpckhwd_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.WIG 69`
    EVEX_Vpunpckhwd_VX_k1z_HX_WX,
    /// `EVEX.NDS.256.66.0F.WIG 69`
    EVEX_Vpunpckhwd_VY_k1z_HY_WY,
    /// `EVEX.NDS.512.66.0F.WIG 69`
    EVEX_Vpunpckhwd_VZ_k1z_HZ_WZ,
    /// `0F6A`
    Punpckhdq_P_Q,
    /// `66 0F6A`
    Punpckhdq_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 6A`
    VEX_Vpunpckhdq_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 6A`
    VEX_Vpunpckhdq_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W0 6A`
    EVEX_Vpunpckhdq_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W0 6A`
    EVEX_Vpunpckhdq_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W0 6A`
    EVEX_Vpunpckhdq_VZ_k1z_HZ_WZ_b,
    /// `0F6B`
    Packssdw_P_Q,
    /// `66 0F6B`
    Packssdw_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 6B`
    VEX_Vpackssdw_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 6B`
    VEX_Vpackssdw_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W0 6B`
    EVEX_Vpackssdw_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W0 6B`
    EVEX_Vpackssdw_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W0 6B`
    EVEX_Vpackssdw_VZ_k1z_HZ_WZ_b,
    /// `66 0F6C`
    Punpcklqdq_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 6C`
    VEX_Vpunpcklqdq_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 6C`
    VEX_Vpunpcklqdq_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W1 6C`
    EVEX_Vpunpcklqdq_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W1 6C`
    EVEX_Vpunpcklqdq_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W1 6C`
    EVEX_Vpunpcklqdq_VZ_k1z_HZ_WZ_b,
    /// `66 0F6D`
    Punpckhqdq_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 6D`
    VEX_Vpunpckhqdq_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 6D`
    VEX_Vpunpckhqdq_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W1 6D`
    EVEX_Vpunpckhqdq_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W1 6D`
    EVEX_Vpunpckhqdq_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W1 6D`
    EVEX_Vpunpckhqdq_VZ_k1z_HZ_WZ_b,
    /// `0F6E`
    Movd_P_Ed,
    /// `REX.W 0F6E`
    Movq_P_Eq,
    /// `66 0F6E`
    Movd_VX_Ed,
    /// `66 REX.W 0F6E`
    Movq_VX_Eq,
    /// `VEX.128.66.0F.W0 6E`
    VEX_Vmovd_VX_Ed,
    /// `VEX.128.66.0F.W1 6E`
    VEX_Vmovq_VX_Eq,
    /// `EVEX.128.66.0F.W0 6E`
    EVEX_Vmovd_VX_Ed,
    /// `EVEX.128.66.0F.W1 6E`
    EVEX_Vmovq_VX_Eq,
    /// `0F6F`
    Movq_P_Q,
    /// `66 0F6F`
    Movdqa_VX_WX,
    /// `VEX.128.66.0F.WIG 6F`
    VEX_Vmovdqa_VX_WX,
    /// `VEX.256.66.0F.WIG 6F`
    VEX_Vmovdqa_VY_WY,
    /// `EVEX.128.66.0F.W0 6F`
    EVEX_Vmovdqa32_VX_k1z_WX,
    /// `EVEX.256.66.0F.W0 6F`
    EVEX_Vmovdqa32_VY_k1z_WY,
    /// `EVEX.512.66.0F.W0 6F`
    EVEX_Vmovdqa32_VZ_k1z_WZ,
    /// `EVEX.128.66.0F.W1 6F`
    EVEX_Vmovdqa64_VX_k1z_WX,
    /// `EVEX.256.66.0F.W1 6F`
    EVEX_Vmovdqa64_VY_k1z_WY,
    /// `EVEX.512.66.0F.W1 6F`
    EVEX_Vmovdqa64_VZ_k1z_WZ,
    /// `F3 0F6F`
    Movdqu_VX_WX,
    /// `VEX.128.F3.0F.WIG 6F`
    VEX_Vmovdqu_VX_WX,
    /// `VEX.256.F3.0F.WIG 6F`
    VEX_Vmovdqu_VY_WY,
    /// `EVEX.128.F3.0F.W0 6F`
    EVEX_Vmovdqu32_VX_k1z_WX,
    /// `EVEX.256.F3.0F.W0 6F`
    EVEX_Vmovdqu32_VY_k1z_WY,
    /// `EVEX.512.F3.0F.W0 6F`
    EVEX_Vmovdqu32_VZ_k1z_WZ,
    /// `EVEX.128.F3.0F.W1 6F`
    EVEX_Vmovdqu64_VX_k1z_WX,
    /// `EVEX.256.F3.0F.W1 6F`
    EVEX_Vmovdqu64_VY_k1z_WY,
    /// `EVEX.512.F3.0F.W1 6F`
    EVEX_Vmovdqu64_VZ_k1z_WZ,
    /// `EVEX.128.F2.0F.W0 6F`
    EVEX_Vmovdqu8_VX_k1z_WX,
    /// `EVEX.256.F2.0F.W0 6F`
    EVEX_Vmovdqu8_VY_k1z_WY,
    /// `EVEX.512.F2.0F.W0 6F`
    EVEX_Vmovdqu8_VZ_k1z_WZ,
    /// `EVEX.128.F2.0F.W1 6F`
    EVEX_Vmovdqu16_VX_k1z_WX,
    /// `EVEX.256.F2.0F.W1 6F`
    EVEX_Vmovdqu16_VY_k1z_WY,
    /// `EVEX.512.F2.0F.W1 6F`
    EVEX_Vmovdqu16_VZ_k1z_WZ,
    /// `0F70`
    Pshufw_P_Q_Ib,
    /// `66 0F70`
    Pshufd_VX_WX_Ib,
    /// `VEX.128.66.0F.WIG 70`
    VEX_Vpshufd_VX_WX_Ib,
    /// `VEX.256.66.0F.WIG 70`
    VEX_Vpshufd_VY_WY_Ib,
    /// `EVEX.128.66.0F.W0 70`
    EVEX_Vpshufd_VX_k1z_WX_Ib_b,
    /// `EVEX.256.66.0F.W0 70`
    EVEX_Vpshufd_VY_k1z_WY_Ib_b,
    /// `EVEX.512.66.0F.W0 70`
    EVEX_Vpshufd_VZ_k1z_WZ_Ib_b,
    /// `F3 0F70`
    Pshufhw_VX_WX_Ib,
    /// `VEX.128.F3.0F.WIG 70`
    VEX_Vpshufhw_VX_WX_Ib,
    /// `VEX.256.F3.0F.WIG 70`
    VEX_Vpshufhw_VY_WY_Ib,
    /// `EVEX.128.F3.0F.WIG 70`
    EVEX_Vpshufhw_VX_k1z_WX_Ib,
    /// `EVEX.256.F3.0F.WIG 70`
    EVEX_Vpshufhw_VY_k1z_WY_Ib,
    /// `EVEX.512.F3.0F.WIG 70`
    EVEX_Vpshufhw_VZ_k1z_WZ_Ib,
    /// `F2 0F70`
    Pshuflw_VX_WX_Ib,
    /// `VEX.128.F2.0F.WIG 70`
    VEX_Vpshuflw_VX_WX_Ib,
    /// `VEX.256.F2.0F.WIG 70`
    VEX_Vpshuflw_VY_WY_Ib,
    /// `EVEX.128.F2.0F.WIG 70`
    EVEX_Vpshuflw_VX_k1z_WX_Ib,
    /// `EVEX.256.F2.0F.WIG 70`
    EVEX_Vpshuflw_VY_k1z_WY_Ib,
    /// `EVEX.512.F2.0F.WIG 70`
    EVEX_Vpshuflw_VZ_k1z_WZ_Ib,
    /// `0F74`
    Pcmpeqb_P_Q,
    /// `66 0F74`
    Pcmpeqb_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 74`
    VEX_Vpcmpeqb_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 74`
    VEX_Vpcmpeqb_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.WIG 74`
    EVEX_Vpcmpeqb_VK_k1_HX_WX,
    /// `EVEX.NDS.256.66.0F.WIG 74`
    EVEX_Vpcmpeqb_VK_k1_HY_WY,
    /// `EVEX.NDS.512.66.0F.WIG 74`
    EVEX_Vpcmpeqb_VK_k1_HZ_WZ,
    /// `0F75`
    Pcmpeqw_P_Q,
    /// `66 0F75`
    Pcmpeqw_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 75`
    VEX_Vpcmpeqw_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 75`
    VEX_Vpcmpeqw_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.WIG 75`
    EVEX_Vpcmpeqw_VK_k1_HX_WX,
    /// `EVEX.NDS.256.66.0F.WIG 75`
    EVEX_Vpcmpeqw_VK_k1_HY_WY,
    /// `EVEX.NDS.512.66.0F.WIG 75`
    EVEX_Vpcmpeqw_VK_k1_HZ_WZ,
    /// `0F76`
    Pcmpeqd_P_Q,
    /// `66 0F76`
    Pcmpeqd_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG 76`
    VEX_Vpcmpeqd_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG 76`
    VEX_Vpcmpeqd_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W0 76`
    EVEX_Vpcmpeqd_VK_k1_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W0 76`
    EVEX_Vpcmpeqd_VK_k1_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W0 76`
    EVEX_Vpcmpeqd_VK_k1_HZ_WZ_b,
    /// `0F77`
    Emms,
    /// `VEX.128.0F.WIG 77`
    VEX_Vzeroupper,
    /// `VEX.256.0F.WIG 77`
    VEX_Vzeroall,
    /// `0F7E`
    Movd_Ed_P,
    /// `REX.W 0F7E`
    Movq_Eq_P,
    /// `66 0F7E`
    Movd_Ed_VX,
    /// `66 REX.W 0F7E`
    Movq_Eq_VX,
    /// `VEX.128.66.0F.W0 7E`
    VEX_Vmovd_Ed_VX,
    /// `VEX.128.66.0F.W1 7E`
    VEX_Vmovq_Eq_VX,
    /// `EVEX.128.66.0F.W0 7E`
    EVEX_Vmovd_Ed_VX,
    /// `EVEX.128.66.0F.W1 7E`
    EVEX_Vmovq_Eq_VX,
    /// `F3 0F7E`
    Movq_VX_WX,
    /// `VEX.128.F3.0F.WIG 7E`
    VEX_Vmovq_VX_WX,
    /// `EVEX.128.F3.0F.W1 7E`
    EVEX_Vmovq_VX_WX,
    /// `0F7F`
    Movq_Q_P,
    /// `66 0F7F`
    Movdqa_WX_VX,
    /// `VEX.128.66.0F.WIG 7F`
    VEX_Vmovdqa_WX_VX,
    /// `VEX.256.66.0F.WIG 7F`
    VEX_Vmovdqa_WY_VY,
    /// `EVEX.128.66.0F.W0 7F`
    EVEX_Vmovdqa32_WX_k1z_VX,
    /// `EVEX.256.66.0F.W0 7F`
    EVEX_Vmovdqa32_WY_k1z_VY,
    /// `EVEX.512.66.0F.W0 7F`
    EVEX_Vmovdqa32_WZ_k1z_VZ,
    /// `EVEX.128.66.0F.W1 7F`
    EVEX_Vmovdqa64_WX_k1z_VX,
    /// `EVEX.256.66.0F.W1 7F`
    EVEX_Vmovdqa64_WY_k1z_VY,
    /// `EVEX.512.66.0F.W1 7F`
    EVEX_Vmovdqa64_WZ_k1z_VZ,
    /// `F3 0F7F`
    Movdqu_WX_VX,
    /// `VEX.128.F3.0F.WIG 7F`
    VEX_Vmovdqu_WX_VX,
    /// `VEX.256.F3.0F.WIG 7F`
    VEX_Vmovdqu_WY_VY,
    /// `EVEX.128.F3.0F.W0 7F`
    EVEX_Vmovdqu32_WX_k1z_VX,
    /// `EVEX.256.F3.0F.W0 7F`
    EVEX_Vmovdqu32_WY_k1z_VY,
    /// `EVEX.512.F3.0F.W0 7F`
    EVEX_Vmovdqu32_WZ_k1z_VZ,
    /// `EVEX.128.F3.0F.W1 7F`
    EVEX_Vmovdqu64_WX_k1z_VX,
    /// `EVEX.256.F3.0F.W1 7F`
    EVEX_Vmovdqu64_WY_k1z_VY,
    /// `EVEX.512.F3.0F.W1 7F`
    EVEX_Vmovdqu64_WZ_k1z_VZ,
    /// `EVEX.128.F2.0F.W0 7F`
    EVEX_Vmovdqu8_WX_k1z_VX,
    /// `EVEX.256.F2.0F.W0 7F`
    EVEX_Vmovdqu8_WY_k1z_VY,
    /// `EVEX.512.F2.0F.W0 7F`
    EVEX_Vmovdqu8_WZ_k1z_VZ,
    /// `EVEX.128.F2.0F.W1 7F`
    EVEX_Vmovdqu16_WX_k1z_VX,
    /// `EVEX.256.F2.0F.W1 7F`
    EVEX_Vmovdqu16_WY_k1z_VY,
    /// `EVEX.512.F2.0F.W1 7F`
    EVEX_Vmovdqu16_WZ_k1z_VZ,
    /// `o16 0F80`
    Jo_Jw16,
    /// `o32 0F80`
    Jo_Jd32,
    /// `0F80`
    Jo_Jd64,
    /// `o16 0F81`
    Jno_Jw16,
    /// `o32 0F81`
    Jno_Jd32,
    /// `0F81`
    Jno_Jd64,
    /// `o16 0F82`
    Jb_Jw16,
    /// `o32 0F82`
    Jb_Jd32,
    /// `0F82`
    Jb_Jd64,
    /// `o16 0F83`
    Jae_Jw16,
    /// `o32 0F83`
    Jae_Jd32,
    /// `0F83`
    Jae_Jd64,
    /// `o16 0F84`
    Je_Jw16,
    /// `o32 0F84`
    Je_Jd32,
    /// `0F84`
    Je_Jd64,
    /// `o16 0F85`
    Jne_Jw16,
    /// `o32 0F85`
    Jne_Jd32,
    /// `0F85`
    Jne_Jd64,
    /// `o16 0F86`
    Jbe_Jw16,
    /// `o32 0F86`
    Jbe_Jd32,
    /// `0F86`
    Jbe_Jd64,
    /// `o16 0F87`
    Ja_Jw16,
    /// `o32 0F87`
    Ja_Jd32,
    /// `0F87`
    Ja_Jd64,
    /// `o16 0F88`
    Js_Jw16,
    /// `o32 0F88`
    Js_Jd32,
    /// `0F88`
    Js_Jd64,
    /// `o16 0F89`
    Jns_Jw16,
    /// `o32 0F89`
    Jns_Jd32,
    /// `0F89`
    Jns_Jd64,
    /// `o16 0F8A`
    Jp_Jw16,
    /// `o32 0F8A`
    Jp_Jd32,
    /// `0F8A`
    Jp_Jd64,
    /// `o16 0F8B`
    Jnp_Jw16,
    /// `o32 0F8B`
    Jnp_Jd32,
    /// `0F8B`
    Jnp_Jd64,
    /// `o16 0F8C`
    Jl_Jw16,
    /// `o32 0F8C`
    Jl_Jd32,
    /// `0F8C`
    Jl_Jd64,
    /// `o16 0F8D`
    Jge_Jw16,
    /// `o32 0F8D`
    Jge_Jd32,
    /// `0F8D`
    Jge_Jd64,
    /// `o16 0F8E`
    Jle_Jw16,
    /// `o32 0F8E`
    Jle_Jd32,
    /// `0F8E`
    Jle_Jd64,
    /// `o16 0F8F`
    Jg_Jw16,
    /// `o32 0F8F`
    Jg_Jd32,
    /// `0F8F`
    Jg_Jd64,
    /// `0F90`
    Seto_Eb,
    /// `0F91`
    Setno_Eb,
    /// `0F92`
    Setb_Eb,
    /// `0F93`
    Setae_Eb,
    /// `0F94`
    Sete_Eb,
    /// `0F95`
    Setne_Eb,
    /// `0F96`
    Setbe_Eb,
    /// `0F97`
    Seta_Eb,
    /// `0F98`
    Sets_Eb,
    /// `0F99`
    Setns_Eb,
    /// `0F9A`
    Setp_Eb,
    /// `0F9B`
    Setnp_Eb,
    /// `0F9C`
    Setl_Eb,
    /// `0F9D`
    Setge_Eb,
    /// `0F9E`
    Setle_Eb,
    /// `0F9F`
    Setg_Eb,
    /// `VEX.L0.0F.W0 90`
    VEX_Kmovw_VK_WK,
    /// `VEX.L0.0F.W1 90`
    VEX_Kmovq_VK_WK,
    /// `VEX.L0.66.0F.W0 90`
    VEX_Kmovb_VK_WK,
    /// `VEX.L0.66.0F.W1 90`
    VEX_Kmovd_VK_WK,
    /// `VEX.L0.0F.W0 91`
    VEX_Kmovw_MK_VK,
    /// `VEX.L0.0F.W1 91`
    VEX_Kmovq_MK_VK,
    /// `VEX.L0.66.0F.W0 91`
    VEX_Kmovb_MK_VK,
    /// `VEX.L0.66.0F.W1 91`
    VEX_Kmovd_MK_VK,
    /// `VEX.L0.0F.W0 92`
    VEX_Kmovw_VK_Rd,
    /// `VEX.L0.66.0F.W0 92`
    VEX_Kmovb_VK_Rd,
    /// `VEX.L0.F2.0F.W1 92`
    VEX_Kmovq_VK_Rq,
    /// `VEX.L0.F2.0F.W0 92`
    VEX_Kmovd_VK_Rd,
    /// `VEX.L0.0F.W0 93`
    VEX_Kmovw_Gd_RK,
    /// `VEX.L0.66.0F.W0 93`
    VEX_Kmovb_Gd_RK,
    /// `VEX.L0.F2.0F.W1 93`
    VEX_Kmovq_Gq_RK,
    /// `VEX.L0.F2.0F.W0 93`
    VEX_Kmovd_Gd_RK,
    /// `VEX.L0.0F.W0 98`
    VEX_Kortestw_VK_RK,
    /// `VEX.L0.0F.W1 98`
    VEX_Kortestq_VK_RK,
    /// `VEX.L0.66.0F.W0 98`
    VEX_Kortestb_VK_RK,
    /// `VEX.L0.66.0F.W1 98`
    VEX_Kortestd_VK_RK,
    /// `VEX.L0.0F.W0 99`
    VEX_Ktestw_VK_RK,
    /// `VEX.L0.0F.W1 99`
    VEX_Ktestq_VK_RK,
    /// `VEX.L0.66.0F.W0 99`
    VEX_Ktestb_VK_RK,
    /// `VEX.L0.66.0F.W1 99`
    VEX_Ktestd_VK_RK,
    /// `o16 0FA0`
    Pushw_FS,
    /// `o32 0FA0`
    Pushd_FS,
    /// `0FA0`
    Pushq_FS,
    /// `o16 0FA1`
    Popw_FS,
    /// `o32 0FA1`
    Popd_FS,
    /// `0FA1`
    Popq_FS,
    /// `0FA2`
    Cpuid,
    /// `o16 0FA3`
    Bt_Ew_Gw,
    /// `o32 0FA3`
    Bt_Ed_Gd,
    /// `REX.W 0FA3`
    Bt_Eq_Gq,
    /// `o16 0FA4`
    Shld_Ew_Gw_Ib,
    /// `o32 0FA4`
    Shld_Ed_Gd_Ib,
    /// `REX.W 0FA4`
    Shld_Eq_Gq_Ib,
    /// `o16 0FA5`
    Shld_Ew_Gw_CL,
    /// `o32 0FA5`
    Shld_Ed_Gd_CL,
    /// `REX.W 0FA5`
    Shld_Eq_Gq_CL,
    /// `o16 0FA8`
    Pushw_GS,
    /// `o32 0FA8`
    Pushd_GS,
    /// `0FA8`
    Pushq_GS,
    /// `o16 0FA9`
    Popw_GS,
    /// `o32 0FA9`
    Popd_GS,
    /// `0FA9`
    Popq_GS,
    /// `o16 0FAB`
    Bts_Ew_Gw,
    /// `o32 0FAB`
    Bts_Ed_Gd,
    /// `REX.W 0FAB`
    Bts_Eq_Gq,
    /// `o16 0FAC`
    Shrd_Ew_Gw_Ib,
    /// `o32 0FAC`
    Shrd_Ed_Gd_Ib,
    /// `REX.W 0FAC`
    Shrd_Eq_Gq_Ib,
    /// `o16 0FAD`
    Shrd_Ew_Gw_CL,
    /// `o32 0FAD`
    Shrd_Ed_Gd_CL,
    /// `REX.W 0FAD`
    Shrd_Eq_Gq_CL,
    /// `0FAE /0`
    Fxsave_M,
    /// `REX.W 0FAE /0`
    Fxsave64_M,
    /// `0FAE /1`
    Fxrstor_M,
    /// `REX.W 0FAE /1`
    Fxrstor64_M,
    /// `0FAE /2`
    Ldmxcsr_Md,
    /// `0FAE /3`
    Stmxcsr_Md,
    /// `0FAE /4`
    Xsave_M,
    /// `REX.W 0FAE /4`
    Xsave64_M,
    /// `0FAE /5`
    Xrstor_M,
    /// `REX.W 0FAE /5`
    Xrstor64_M,
    /// `0FAE /7`
    Clflush_Mb,
    /// `0FAE E8`
    Lfence,
    /// `0FAE F0`
    Mfence,
    /// `0FAE F8`
    Sfence,
    /// `o16 0FAF`
    Imul_Gw_Ew,
    /// `o32 0FAF`
    Imul_Gd_Ed,
    /// `REX.W 0FAF`
    Imul_Gq_Eq,
    /// `0FB0`
    Cmpxchg_Eb_Gb,
    /// `o16 0FB1`
    Cmpxchg_Ew_Gw,
    /// `o32 0FB1`
    Cmpxchg_Ed_Gd,
    /// `REX.W 0FB1`
    Cmpxchg_Eq_Gq,
    /// `o16 0FB3`
    Btr_Ew_Gw,
    /// `o32 0FB3`
    Btr_Ed_Gd,
    /// `REX.W 0FB3`
    Btr_Eq_Gq,
    /// `o16 0FB6`
    Movzx_Gw_Eb,
    /// `o32 0FB6`
    Movzx_Gd_Eb,
    /// `REX.W 0FB6`
    Movzx_Gq_Eb,
    /// `o16 0FB7`
    Movzx_Gw_Ew,
    /// `o32 0FB7`
    Movzx_Gd_Ew,
    /// `REX.W 0FB7`
    Movzx_Gq_Ew,
    /// `o16 F3 0FB8`
    Popcnt_Gw_Ew,
    /// `o32 F3 0FB8`
    Popcnt_Gd_Ed,
    /// `F3 REX.W 0FB8`
    Popcnt_Gq_Eq,
    /// `o16 0FBA /4`
    Bt_Ew_Ib,
    /// `o32 0FBA /4`
    Bt_Ed_Ib,
    /// `REX.W 0FBA /4`
    Bt_Eq_Ib,
    /// `o16 0FBA /5`
    Bts_Ew_Ib,
    /// `o32 0FBA /5`
    Bts_Ed_Ib,
    /// `REX.W 0FBA /5`
    Bts_Eq_Ib,
    /// `o16 0FBA /6`
    Btr_Ew_Ib,
    /// `o32 0FBA /6`
    Btr_Ed_Ib,
    /// `REX.W 0FBA /6`
    Btr_Eq_Ib,
    /// `o16 0FBA /7`
    Btc_Ew_Ib,
    /// `o32 0FBA /7`
    Btc_Ed_Ib,
    /// `REX.W 0FBA /7`
    Btc_Eq_Ib,
    /// `o16 0FBB`
    Btc_Ew_Gw,
    /// `o32 0FBB`
    Btc_Ed_Gd,
    /// `REX.W 0FBB`
    Btc_Eq_Gq,
    /// `o16 0FBC`
    Bsf_Gw_Ew,
    /// `o32 0FBC`
    Bsf_Gd_Ed,
    /// `REX.W 0FBC`
    Bsf_Gq_Eq,
    /// `o16 0FBD`
    Bsr_Gw_Ew,
    /// `o32 0FBD`
    Bsr_Gd_Ed,
    /// `REX.W 0FBD`
    Bsr_Gq_Eq,
    /// `o16 0FBE`
    Movsx_Gw_Eb,
    /// `o32 0FBE`
    Movsx_Gd_Eb,
    /// `REX.W 0FBE`
    Movsx_Gq_Eb,
    /// `o16 0FBF`
    Movsx_Gw_Ew,
    /// `o32 0FBF`
    Movsx_Gd_Ew,
    /// `REX.W 0FBF`
    Movsx_Gq_Ew,
    /// `o16 F3 0FBC`
    Tzcnt_Gw_Ew,
    /// `o32 F3 0FBC`
    Tzcnt_Gd_Ed,
    /// `F3 REX.W 0FBC`
    Tzcnt_Gq_Eq,
    /// `o16 F3 0FBD`
    Lzcnt_Gw_Ew,
    /// `o32 F3 0FBD`
    Lzcnt_Gd_Ed,
    /// `F3 REX.W 0FBD`
    Lzcnt_Gq_Eq,
    /// `0FC0`
    Xadd_Eb_Gb,
    /// `o16 0FC1`
    Xadd_Ew_Gw,
    /// `o32 0FC1`
    Xadd_Ed_Gd,
    /// `REX.W 0FC1`
    Xadd_Eq_Gq,
    /// `0FC2`
    Cmpps_VX_WX_Ib,
    /// `VEX.NDS.128.0F.WIG C2`
    VEX_Vcmpps_VX_HX_WX_Ib,
    /// `VEX.NDS.256.0F.WIG C2`
    VEX_Vcmpps_VY_HY_WY_Ib,
    /// `EVEX.NDS.128.0F.W0 C2`
    EVEX_Vcmpps_VK_k1_HX_WX_Ib_b,
    /// `EVEX.NDS.256.0F.W0 C2`
    EVEX_Vcmpps_VK_k1_HY_WY_Ib_b,
    /// `EVEX.NDS.512.0F.W0 C2`
    EVEX_Vcmpps_VK_k1_HZ_WZ_Ib_sae_b,
    /// `66 0FC2`
    Cmppd_VX_WX_Ib,
    /// `VEX.NDS.128.66.0F.WIG C2`
    VEX_Vcmppd_VX_HX_WX_Ib,
    /// `VEX.NDS.256.66.0F.WIG C2`
    VEX_Vcmppd_VY_HY_WY_Ib,
    /// `EVEX.NDS.128.66.0F.W1 C2`
    EVEX_Vcmppd_VK_k1_HX_WX_Ib_b,
    /// `EVEX.NDS.256.66.0F.W1 C2`
    EVEX_Vcmppd_VK_k1_HY_WY_Ib_b,
    /// `EVEX.NDS.512.66.0F.W1 C2`
    EVEX_Vcmppd_VK_k1_HZ_WZ_Ib_sae_b,
    /// `F3 0FC2`
    Cmpss_VX_WX_Ib,
    /// `VEX.NDS.LIG.F3.0F.WIG C2`
    VEX_Vcmpss_VX_HX_WX_Ib,
    /// `EVEX.NDS.LIG.F3.0F.W0 C2`
    EVEX_Vcmpss_VK_k1_HX_WX_Ib_sae,
    /// `F2 0FC2`
    Cmpsd_VX_WX_Ib,
    /// `VEX.NDS.LIG.F2.0F.WIG C2`
    VEX_Vcmpsd_VX_HX_WX_Ib,
    /// `EVEX.NDS.LIG.F2.0F.W1 C2`
    EVEX_Vcmpsd_VK_k1_HX_WX_Ib_sae,
    /// `0FC6`
    Shufps_VX_WX_Ib,
    /// `VEX.NDS.128.0F.WIG C6`
    VEX_Vshufps_VX_HX_WX_Ib,
    /// `VEX.NDS.256.0F.WIG C6`
    VEX_Vshufps_VY_HY_WY_Ib,
    /// `EVEX.NDS.128.0F.W0 C6`
    EVEX_Vshufps_VX_k1z_HX_WX_Ib_b,
    /// `EVEX.NDS.256.0F.W0 C6`
    EVEX_Vshufps_VY_k1z_HY_WY_Ib_b,
    /// `EVEX.NDS.512.0F.W0 C6`
    EVEX_Vshufps_VZ_k1z_HZ_WZ_Ib_b,
    /// `66 0FC6`
    Shufpd_VX_WX_Ib,
    /// `VEX.NDS.128.66.0F.WIG C6`
    VEX_Vshufpd_VX_HX_WX_Ib,
    /// `VEX.NDS.256.66.0F.WIG C6`
    VEX_Vshufpd_VY_HY_WY_Ib,
    /// `EVEX.NDS.128.66.0F.W1 C6`
    EVEX_Vshufpd_VX_k1z_HX_WX_Ib_b,
    /// `EVEX.NDS.256.66.0F.W1 C6`
    EVEX_Vshufpd_VY_k1z_HY_WY_Ib_b,
    /// `EVEX.NDS.512.66.0F.W1 C6`
    EVEX_Vshufpd_VZ_k1z_HZ_WZ_Ib_b,
    /// `0FC7 /1`
    Cmpxchg8b_Mq,
    /// `REX.W 0FC7 /1`
    Cmpxchg16b_Mo,
    /// `o16 0FC7 /6`
    Rdrand_Rw,
    /// `o32 0FC7 /6`
    Rdrand_Rd,
    /// `REX.W 0FC7 /6`
    Rdrand_Rq,
    /// `o16 0FC7 /7`
    Rdseed_Rw,
    /// `o32 0FC7 /7`
    Rdseed_Rd,
    /// `REX.W 0FC7 /7`
    Rdseed_Rq,
    /// `o16 0FC8`
    Bswap_AX,
    /// `o16 REX.B 0FC8`
    Bswap_R8W,
    /// `o32 0FC8`
    Bswap_EAX,
    /// `o32 REX.B 0FC8`
    Bswap_R8D,
    /// `REX.W 0FC8`
    Bswap_RAX,
    /// `REX.W REX.B 0FC8`
    Bswap_R8,
    /// `o16 0FC9`
    Bswap_CX,
    /// `o16 REX.B 0FC9`
    Bswap_R9W,
    /// `o32 0FC9`
    Bswap_ECX,
    /// `o32 REX.B 0FC9`
    Bswap_R9D,
    /// `REX.W 0FC9`
    Bswap_RCX,
    /// `REX.W REX.B 0FC9`
    Bswap_R9,
    /// `o16 0FCA`
    Bswap_DX,
    /// `o16 REX.B 0FCA`
    Bswap_R10W,
    /// `o32 0FCA`
    Bswap_EDX,
    /// `o32 REX.B 0FCA`
    Bswap_R10D,
    /// `REX.W 0FCA`
    Bswap_RDX,
    /// `REX.W REX.B 0FCA`
    Bswap_R10,
    /// `o16 0FCB`
    Bswap_BX,
    /// `o16 REX.B 0FCB`
    Bswap_R11W,
    /// `o32 0FCB`
    Bswap_EBX,
    /// `o32 REX.B 0FCB`
    Bswap_R11D,
    /// `REX.W 0FCB`
    Bswap_RBX,
    /// `REX.W REX.B 0FCB`
    Bswap_R11,
    /// `o16 0FCC`
    Bswap_SP,
    /// `o16 REX.B 0FCC`
    Bswap_R12W,
    /// `o32 0FCC`
    Bswap_ESP,
    /// `o32 REX.B 0FCC`
    Bswap_R12D,
    /// `REX.W 0FCC`
    Bswap_RSP,
    /// `REX.W REX.B 0FCC`
    Bswap_R12,
    /// `o16 0FCD`
    Bswap_BP,
    /// `o16 REX.B 0FCD`
    Bswap_R13W,
    /// `o32 0FCD`
    Bswap_EBP,
    /// `o32 REX.B 0FCD`
    Bswap_R13D,
    /// `REX.W 0FCD`
    Bswap_RBP,
    /// `REX.W REX.B 0FCD`
    Bswap_R13,
    /// `o16 0FCE`
    Bswap_SI,
    /// `o16 REX.B 0FCE`
    Bswap_R14W,
    /// `o32 0FCE`
    Bswap_ESI,
    /// `o32 REX.B 0FCE`
    Bswap_R14D,
    /// `REX.W 0FCE`
    Bswap_RSI,
    /// `REX.W REX.B 0FCE`
    Bswap_R14,
    /// `o16 0FCF`
    Bswap_DI,
    /// `o16 REX.B 0FCF`
    Bswap_R15W,
    /// `o32 0FCF`
    Bswap_EDI,
    /// `o32 REX.B 0FCF`
    Bswap_R15D,
    /// `REX.W 0FCF`
    Bswap_RDI,
    /// `REX.W REX.B 0FCF`
    Bswap_R15,
    /// `0FD4`
    Paddq_P_Q,
    /// `66 0FD4`
    Paddq_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG D4`
    VEX_Vpaddq_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG D4`
    VEX_Vpaddq_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W1 D4`
    EVEX_Vpaddq_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W1 D4`
    EVEX_Vpaddq_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W1 D4`
    EVEX_Vpaddq_VZ_k1z_HZ_WZ_b,
    /// `66 0FD6`
    Movq_WX_VX,
    /// `VEX.128.66.0F.WIG D6`
    VEX_Vmovq_WX_VX,
    /// `EVEX.128.66.0F.W1 D6`
    EVEX_Vmovq_WX_VX,
    /// `F3 0FD6`
    Movq2dq_VX_N,
    /// `F2 0FD6`
    Movdq2q_P_RX,
    /// `0FD7`
    Pmovmskb_Gd_N,
    /// `REX.W 0FD7`
    Pmovmskb_Gq_N,
    /// `66 0FD7`
    Pmovmskb_Gd_RX,
    /// `66 REX.W 0FD7`
    Pmovmskb_Gq_RX,
    /// `VEX.128.66.0F.W0 D7`
    VEX_Vpmovmskb_Gd_RX,
    /// `VEX.128.66.0F.W1 D7`
    VEX_Vpmovmskb_Gq_RX,
    /// `VEX.256.66.0F.W0 D7`
    VEX_Vpmovmskb_Gd_RY,
    /// `VEX.256.66.0F.W1 D7`
    VEX_Vpmovmskb_Gq_RY,
    /// `0FDB`
    Pand_P_Q,
    /// `66 0FDB`
    Pand_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG DB`
    VEX_Vpand_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG DB`
    VEX_Vpand_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W0 DB`
    EVEX_Vpandd_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W0 DB`
    EVEX_Vpandd_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W0 DB`
    EVEX_Vpandd_VZ_k1z_HZ_WZ_b,
    /// `EVEX.NDS.128.66.0F.W1 DB`
    EVEX_Vpandq_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W1 DB`
    EVEX_Vpandq_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W1 DB`
    EVEX_Vpandq_VZ_k1z_HZ_WZ_b,
    /// `0FDF`
    Pandn_P_Q,
    /// `66 0FDF`
    Pandn_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG DF`
    VEX_Vpandn_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG DF`
    VEX_Vpandn_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W0 DF`
    EVEX_Vpandnd_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W0 DF`
    EVEX_Vpandnd_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W0 DF`
    EVEX_Vpandnd_VZ_k1z_HZ_WZ_b,
    /// `EVEX.NDS.128.66.0F.W1 DF`
    EVEX_Vpandnq_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W1 DF`
    EVEX_Vpandnq_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W1 DF`
    EVEX_Vpandnq_VZ_k1z_HZ_WZ_b,
    /// `0FEF`
    Pxor_P_Q,
    /// `66 0FEF`
    Pxor_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG EF`
    VEX_Vpxor_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG EF`
    VEX_Vpxor_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W0 EF`
    EVEX_Vpxord_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W0 EF`
    EVEX_Vpxord_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W0 EF`
    EVEX_Vpxord_VZ_k1z_HZ_WZ_b,
    /// `EVEX.NDS.128.66.0F.W1 EF`
    EVEX_Vpxorq_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W1 EF`
    EVEX_Vpxorq_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W1 EF`
    EVEX_Vpxorq_VZ_k1z_HZ_WZ_b,
    /// `0FFE`
    Paddd_P_Q,
    /// `66 0FFE`
    Paddd_VX_WX,
    /// `VEX.NDS.128.66.0F.WIG FE`
    VEX_Vpaddd_VX_HX_WX,
    /// `VEX.NDS.256.66.0F.WIG FE`
    VEX_Vpaddd_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F.W0 FE`
    EVEX_Vpaddd_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F.W0 FE`
    EVEX_Vpaddd_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F.W0 FE`
    EVEX_Vpaddd_VZ_k1z_HZ_WZ_b,
    /// `0F3800`
    Pshufb_P_Q,
    /// `66 0F3800`
    Pshufb_VX_WX,
    /// `VEX.NDS.128.66.0F38.WIG 00`
    VEX_Vpshufb_VX_HX_WX,
    /// `VEX.NDS.256.66.0F38.WIG 00`
    VEX_Vpshufb_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F38.WIG 00`
    EVEX_Vpshufb_VX_k1z_HX_WX,
    /// `EVEX.NDS.256.66.0F38.WIG 00`
    EVEX_Vpshufb_VY_k1z_HY_WY,
    /// `EVEX.NDS.512.66.0F38.WIG 00`
    EVEX_Vpshufb_VZ_k1z_HZ_WZ,
    /// `66 0F3817`
    Ptest_VX_WX,
    /// `VEX.128.66.0F38.WIG 17`
    VEX_Vptest_VX_WX,
    /// `VEX.256.66.0F38.WIG 17`
    VEX_Vptest_VY_WY,
    /// `VEX.128.66.0F38.W0 18`
    VEX_Vbroadcastss_VX_WX,
    /// `VEX.256.66.0F38.W0 18`
    VEX_Vbroadcastss_VY_WX,
    /// `EVEX.128.66.0F38.W0 18`
    EVEX_Vbroadcastss_VX_k1z_WX,
    /// `EVEX.256.66.0F38.W0 18`
    EVEX_Vbroadcastss_VY_k1z_WX,
    /// `EVEX.512.66.0F38.W0 18`
    EVEX_Vbroadcastss_VZ_k1z_WX,
    /// `66 0F3820`
    Pmovsxbw_VX_WX,
    /// `VEX.128.66.0F38.WIG 20`
    VEX_Vpmovsxbw_VX_WX,
    /// `VEX.256.66.0F38.WIG 20`
    VEX_Vpmovsxbw_VY_WX,
    /// `EVEX.128.66.0F38.WIG 20`
    EVEX_Vpmovsxbw_VX_k1z_WX,
    /// `EVEX.256.66.0F38.WIG 20`
    EVEX_Vpmovsxbw_VY_k1z_WX,
    /// `EVEX.512.66.0F38.WIG 20`
    EVEX_Vpmovsxbw_VZ_k1z_WY,
    /// `EVEX.128.F3.0F38.W0 20`
    EVEX_Vpmovswb_WX_k1z_VX,
    /// `EVEX.256.F3.0F38.W0 20`
    EVEX_Vpmovswb_WX_k1z_VY,
    /// `EVEX.512.F3.0F38.W0 20`
    EVEX_Vpmovswb_WY_k1z_VZ,
    /// `66 0F3821`
    Pmovsxbd_VX_WX,
    /// `VEX.128.66.0F38.WIG 21`
    VEX_Vpmovsxbd_VX_WX,
    /// `VEX.256.66.0F38.WIG 21`
    VEX_Vpmovsxbd_VY_WX,
    /// `EVEX.128.66.0F38.WIG 21`
    EVEX_Vpmovsxbd_VX_k1z_WX,
    /// `EVEX.256.66.0F38.WIG 21`
    EVEX_Vpmovsxbd_VY_k1z_WX,
    /// `EVEX.512.66.0F38.WIG 21`
    EVEX_Vpmovsxbd_VZ_k1z_WX,
    /// `EVEX.128.F3.0F38.W0 21`
    EVEX_Vpmovsdb_WX_k1z_VX,
    /// `EVEX.256.F3.0F38.W0 21`
    EVEX_Vpmovsdb_WX_k1z_VY,
    /// `EVEX.512.F3.0F38.W0 21`
    EVEX_Vpmovsdb_WX_k1z_VZ,
    /// `66 0F3822`
    Pmovsxbq_VX_WX,
    /// `VEX.128.66.0F38.WIG 22`
    VEX_Vpmovsxbq_VX_WX,
    /// `VEX.256.66.0F38.WIG 22`
    VEX_Vpmovsxbq_VY_WX,
    /// `EVEX.128.66.0F38.WIG 22`
    EVEX_Vpmovsxbq_VX_k1z_WX,
    /// `EVEX.256.66.0F38.WIG 22`
    EVEX_Vpmovsxbq_VY_k1z_WX,
    /// `EVEX.512.66.0F38.WIG 22`
    EVEX_Vpmovsxbq_VZ_k1z_WX,
    /// `EVEX.128.F3.0F38.W0 22`
    EVEX_Vpmovsqb_WX_k1z_VX,
    /// `EVEX.256.F3.0F38.W0 22`
    EVEX_Vpmovsqb_WX_k1z_VY,
    /// `EVEX.512.F3.0F38.W0 22`
    EVEX_Vpmovsqb_WX_k1z_VZ,
    /// `66 0F3823`
    Pmovsxwd_VX_WX,
    /// `VEX.128.66.0F38.WIG 23`
    VEX_Vpmovsxwd_VX_WX,
    /// `VEX.256.66.0F38.WIG 23`
    VEX_Vpmovsxwd_VY_WX,
    /// `EVEX.128.66.0F38.WIG 23`
    EVEX_Vpmovsxwd_VX_k1z_WX,
    /// `EVEX.256.66.0F38.WIG 23`
    EVEX_Vpmovsxwd_VY_k1z_WX,
    /// `EVEX.512.66.0F38.WIG 23`
    EVEX_Vpmovsxwd_VZ_k1z_WY,
    /// `EVEX.128.F3.0F38.W0 23`
    EVEX_Vpmovsdw_WX_k1z_VX,
    /// `EVEX.256.F3.0F38.W0 23`
    EVEX_Vpmovsdw_WX_k1z_VY,
    /// `EVEX.512.F3.0F38.W0 23`
    EVEX_Vpmovsdw_WY_k1z_VZ,
    /// `66 0F3824`
    Pmovsxwq_VX_WX,
    /// `VEX.128.66.0F38.WIG 24`
    VEX_Vpmovsxwq_VX_WX,
    /// `VEX.256.66.0F38.WIG 24`
    VEX_Vpmovsxwq_VY_WX,
    /// `EVEX.128.66.0F38.WIG 24`
    EVEX_Vpmovsxwq_VX_k1z_WX,
    /// `EVEX.256.66.0F38.WIG 24`
    EVEX_Vpmovsxwq_VY_k1z_WX,
    /// `EVEX.512.66.0F38.WIG 24`
    EVEX_Vpmovsxwq_VZ_k1z_WX,
    /// `EVEX.128.F3.0F38.W0 24`
    EVEX_Vpmovsqw_WX_k1z_VX,
    /// `EVEX.256.F3.0F38.W0 24`
    EVEX_Vpmovsqw_WX_k1z_VY,
    /// `EVEX.512.F3.0F38.W0 24`
    EVEX_Vpmovsqw_WX_k1z_VZ,
    /// `66 0F3825`
    Pmovsxdq_VX_WX,
    /// `VEX.128.66.0F38.WIG 25`
    VEX_Vpmovsxdq_VX_WX,
    /// `VEX.256.66.0F38.WIG 25`
    VEX_Vpmovsxdq_VY_WX,
    /// `EVEX.128.66.0F38.W0 25`
    EVEX_Vpmovsxdq_VX_k1z_WX,
    /// `EVEX.256.66.0F38.W0 25`
    EVEX_Vpmovsxdq_VY_k1z_WX,
    /// `EVEX.512.66.0F38.W0 25`
    EVEX_Vpmovsxdq_VZ_k1z_WY,
    /// `EVEX.128.F3.0F38.W0 25`
    EVEX_Vpmovsqd_WX_k1z_VX,
    /// `EVEX.256.F3.0F38.W0 25`
    EVEX_Vpmovsqd_WX_k1z_VY,
    /// `EVEX.512.F3.0F38.W0 25`
    EVEX_Vpmovsqd_WY_k1z_VZ,
    /// `66 0F3828`
    Pmuldq_VX_WX,
    /// `VEX.NDS.128.66.0F38.WIG 28`
    VEX_Vpmuldq_VX_HX_WX,
    /// `VEX.NDS.256.66.0F38.WIG 28`
    VEX_Vpmuldq_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F38.W1 28`
    EVEX_Vpmuldq_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F38.W1 28`
    EVEX_Vpmuldq_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F38.W1 28`
    EVEX_Vpmuldq_VZ_k1z_HZ_WZ_b,
    /// `EVEX.128.F3.0F38.W0 28`
    EVEX_Vpmovm2b_VX_RK,
    /// `EVEX.256.F3.0F38.W0 28`
    EVEX_Vpmovm2b_VY_RK,
    /// `EVEX.512.F3.0F38.W0 28`
    EVEX_Vpmovm2b_VZ_RK,
    /// `EVEX.128.F3.0F38.W1 28`
    EVEX_Vpmovm2w_VX_RK,
    /// `EVEX.256.F3.0F38.W1 28`
    EVEX_Vpmovm2w_VY_RK,
    /// `EVEX.512.F3.0F38.W1 28`
    EVEX_Vpmovm2w_VZ_RK,
    /// `66 0F3830`
    Pmovzxbw_VX_WX,
    /// `VEX.128.66.0F38.WIG 30`
    VEX_Vpmovzxbw_VX_WX,
    /// `VEX.256.66.0F38.WIG 30`
    VEX_Vpmovzxbw_VY_WX,
    /// `EVEX.128.66.0F38.WIG 30`
    EVEX_Vpmovzxbw_VX_k1z_WX,
    /// `EVEX.256.66.0F38.WIG 30`
    EVEX_Vpmovzxbw_VY_k1z_WX,
    /// `EVEX.512.66.0F38.WIG 30`
    EVEX_Vpmovzxbw_VZ_k1z_WY,
    /// `EVEX.128.F3.0F38.W0 30`
    EVEX_Vpmovwb_WX_k1z_VX,
    /// `EVEX.256.F3.0F38.W0 30`
    EVEX_Vpmovwb_WX_k1z_VY,
    /// `EVEX.512.F3.0F38.W0 30`
    EVEX_Vpmovwb_WY_k1z_VZ,
    /// `66 0F3831`
    Pmovzxbd_VX_WX,
    /// `VEX.128.66.0F38.WIG 31`
    VEX_Vpmovzxbd_VX_WX,
    /// `VEX.256.66.0F38.WIG 31`
    VEX_Vpmovzxbd_VY_WX,
    /// `EVEX.128.66.0F38.WIG 31`
    EVEX_Vpmovzxbd_VX_k1z_WX,
    /// `EVEX.256.66.0F38.WIG 31`
    EVEX_Vpmovzxbd_VY_k1z_WX,
    /// `EVEX.512.66.0F38.WIG 31`
    EVEX_Vpmovzxbd_VZ_k1z_WX,
    /// `EVEX.128.F3.0F38.W0 31`
    EVEX_Vpmovdb_WX_k1z_VX,
    /// `EVEX.256.F3.0F38.W0 31`
    EVEX_Vpmovdb_WX_k1z_VY,
    /// `EVEX.512.F3.0F38.W0 31`
    EVEX_Vpmovdb_WX_k1z_VZ,
    /// `66 0F3832`
    Pmovzxbq_VX_WX,
    /// `VEX.128.66.0F38.WIG 32`
    VEX_Vpmovzxbq_VX_WX,
    /// `VEX.256.66.0F38.WIG 32`
    VEX_Vpmovzxbq_VY_WX,
    /// `EVEX.128.66.0F38.WIG 32`
    EVEX_Vpmovzxbq_VX_k1z_WX,
    /// `EVEX.256.66.0F38.WIG 32`
    EVEX_Vpmovzxbq_VY_k1z_WX,
    /// `EVEX.512.66.0F38.WIG 32`
    EVEX_Vpmovzxbq_VZ_k1z_WX,
    /// `EVEX.128.F3.0F38.W0 32`
    EVEX_Vpmovqb_WX_k1z_VX,
    /// `EVEX.256.F3.0F38.W0 32`
    EVEX_Vpmovqb_WX_k1z_VY,
    /// `EVEX.512.F3.0F38.W0 32`
    EVEX_Vpmovqb_WX_k1z_VZ,
    /// `66 0F3833`
    Pmovzxwd_VX_WX,
    /// `VEX.128.66.0F38.WIG 33`
    VEX_Vpmovzxwd_VX_WX,
    /// `VEX.256.66.0F38.WIG 33`
    VEX_Vpmovzxwd_VY_WX,
    /// `EVEX.128.66.0F38.WIG 33`
    EVEX_Vpmovzxwd_VX_k1z_WX,
    /// `EVEX.256.66.0F38.WIG 33`
    EVEX_Vpmovzxwd_VY_k1z_WX,
    /// `EVEX.512.66.0F38.WIG 33`
    EVEX_Vpmovzxwd_VZ_k1z_WY,
    /// `EVEX.128.F3.0F38.W0 33`
    EVEX_Vpmovdw_WX_k1z_VX,
    /// `EVEX.256.F3.0F38.W0 33`
    EVEX_Vpmovdw_WX_k1z_VY,
    /// `EVEX.512.F3.0F38.W0 33`
    EVEX_Vpmovdw_WY_k1z_VZ,
    /// `66 0F3834`
    Pmovzxwq_VX_WX,
    /// `VEX.128.66.0F38.WIG 34`
    VEX_Vpmovzxwq_VX_WX,
    /// `VEX.256.66.0F38.WIG 34`
    VEX_Vpmovzxwq_VY_WX,
    /// `EVEX.128.66.0F38.WIG 34`
    EVEX_Vpmovzxwq_VX_k1z_WX,
    /// `EVEX.256.66.0F38.WIG 34`
    EVEX_Vpmovzxwq_VY_k1z_WX,
    /// `EVEX.512.66.0F38.WIG 34`
    EVEX_Vpmovzxwq_VZ_k1z_WX,
    /// `EVEX.128.F3.0F38.W0 34`
    EVEX_Vpmovqw_WX_k1z_VX,
    /// `EVEX.256.F3.0F38.W0 34`
    EVEX_Vpmovqw_WX_k1z_VY,
    /// `EVEX.512.F3.0F38.W0 34`
    EVEX_Vpmovqw_WX_k1z_VZ,
    /// `66 0F3835`
    Pmovzxdq_VX_WX,
    /// `VEX.128.66.0F38.WIG 35`
    VEX_Vpmovzxdq_VX_WX,
    /// `VEX.256.66.0F38.WIG 35`
    VEX_Vpmovzxdq_VY_WX,
    /// `EVEX.128.66.0F38.W0 35`
    EVEX_Vpmovzxdq_VX_k1z_WX,
    /// `EVEX.256.66.0F38.W0 35`
    EVEX_Vpmovzxdq_VY_k1z_WX,
    /// `EVEX.512.66.0F38.W0 35`
    EVEX_Vpmovzxdq_VZ_k1z_WY,
    /// `EVEX.128.F3.0F38.W0 35`
    EVEX_Vpmovqd_WX_k1z_VX,
    /// `EVEX.256.F3.0F38.W0 35`
    EVEX_Vpmovqd_WX_k1z_VY,
    /// `EVEX.512.F3.0F38.W0 35`
    EVEX_Vpmovqd_WY_k1z_VZ,
    /// `VEX.NDS.256.66.0F38.W0 36`
    VEX_Vpermd_VY_HY_WY,
    /// `EVEX.NDS.256.66.0F38.W0 36`
    EVEX_Vpermd_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F38.W0 36`
    EVEX_Vpermd_VZ_k1z_HZ_WZ_b,
    /// `EVEX.NDS.256.66.0F38.W1 36`
    EVEX_Vpermq_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F38.W1 36`
    EVEX_Vpermq_VZ_k1z_HZ_WZ_b,
    /// `VEX.128.66.0F38.W0 58`
    VEX_Vpbroadcastd_VX_WX,
    /// `VEX.256.66.0F38.W0 58`
    VEX_Vpbroadcastd_VY_WX,
    /// `EVEX.128.66.0F38.W0 58`
    EVEX_Vpbroadcastd_VX_k1z_WX,
    /// `EVEX.256.66.0F38.W0 58`
    EVEX_Vpbroadcastd_VY_k1z_WX,
    /// `EVEX.512.66.0F38.W0 58`
    EVEX_Vpbroadcastd_VZ_k1z_WX,
    /// `VEX.128.66.0F38.W0 59`
    VEX_Vpbroadcastq_VX_WX,
    /// `VEX.256.66.0F38.W0 59`
    VEX_Vpbroadcastq_VY_WX,
    /// `EVEX.128.66.0F38.W1 59`
    EVEX_Vpbroadcastq_VX_k1z_WX,
    /// `EVEX.256.66.0F38.W1 59`
    EVEX_Vpbroadcastq_VY_k1z_WX,
    /// `EVEX.512.66.0F38.W1 59`
    EVEX_Vpbroadcastq_VZ_k1z_WX,
    /// `VEX.128.66.0F38.W0 78`
    VEX_Vpbroadcastb_VX_WX,
    /// `VEX.256.66.0F38.W0 78`
    VEX_Vpbroadcastb_VY_WX,
    /// `EVEX.128.66.0F38.W0 78`
    EVEX_Vpbroadcastb_VX_k1z_WX,
    /// `EVEX.256.66.0F38.W0 78`
    EVEX_Vpbroadcastb_VY_k1z_WX,
    /// `EVEX.512.66.0F38.W0 78`
    EVEX_Vpbroadcastb_VZ_k1z_WX,
    /// `VEX.128.66.0F38.W0 79`
    VEX_Vpbroadcastw_VX_WX,
    /// `VEX.256.66.0F38.W0 79`
    VEX_Vpbroadcastw_VY_WX,
    /// `EVEX.128.66.0F38.W0 79`
    EVEX_Vpbroadcastw_VX_k1z_WX,
    /// `EVEX.256.66.0F38.W0 79`
    EVEX_Vpbroadcastw_VY_k1z_WX,
    /// `EVEX.512.66.0F38.W0 79`
    EVEX_Vpbroadcastw_VZ_k1z_WX,
    /// `VEX.128.66.0F38.W0 90`
    VEX_Vpgatherdd_VX_Vm32x_HX,
    /// `VEX.256.66.0F38.W0 90`
    VEX_Vpgatherdd_VY_Vm32y_HY,
    /// `EVEX.128.66.0F38.W0 90`
    EVEX_Vpgatherdd_VX_k1_Vm32x,
    /// `EVEX.256.66.0F38.W0 90`
    EVEX_Vpgatherdd_VY_k1_Vm32y,
    /// `EVEX.512.66.0F38.W0 90`
    EVEX_Vpgatherdd_VZ_k1_Vm32z,
    /// `VEX.128.66.0F38.W1 90`
    VEX_Vpgatherdq_VX_Vm32x_HX,
    /// `VEX.256.66.0F38.W1 90`
    VEX_Vpgatherdq_VY_Vm32x_HY,
    /// `EVEX.128.66.0F38.W1 90`
    EVEX_Vpgatherdq_VX_k1_Vm32x,
    /// `EVEX.256.66.0F38.W1 90`
    EVEX_Vpgatherdq_VY_k1_Vm32x,
    /// `EVEX.512.66.0F38.W1 90`
    EVEX_Vpgatherdq_VZ_k1_Vm32y,
    /// `VEX.128.66.0F38.W0 91`
    VEX_Vpgatherqd_VX_Vm64x_HX,
    /// `VEX.256.66.0F38.W0 91`
    VEX_Vpgatherqd_VX_Vm64y_HX,
    /// `EVEX.128.66.0F38.W0 91`
    EVEX_Vpgatherqd_VX_k1_Vm64x,
    /// `EVEX.256.66.0F38.W0 91`
    EVEX_Vpgatherqd_VX_k1_Vm64y,
    /// `EVEX.512.66.0F38.W0 91`
    EVEX_Vpgatherqd_VY_k1_Vm64z,
    /// `VEX.128.66.0F38.W1 91`
    VEX_Vpgatherqq_VX_Vm64x_HX,
    /// `VEX.256.66.0F38.W1 91`
    VEX_Vpgatherqq_VY_Vm64y_HY,
    /// `EVEX.128.66.0F38.W1 91`
    EVEX_Vpgatherqq_VX_k1_Vm64x,
    /// `EVEX.256.66.0F38.W1 91`
    EVEX_Vpgatherqq_VY_k1_Vm64y,
    /// `EVEX.512.66.0F38.W1 91`
    EVEX_Vpgatherqq_VZ_k1_Vm64z,
    /// `VEX.128.66.0F38.W0 92`
    VEX_Vgatherdps_VX_Vm32x_HX,
    /// `VEX.256.66.0F38.W0 92`
    VEX_Vgatherdps_VY_Vm32y_HY,
    /// `VEX.128.66.0F38.W1 92`
    VEX_Vgatherdpd_VX_Vm32x_HX,
    /// `VEX.256.66.0F38.W1 92`
    VEX_Vgatherdpd_VY_Vm32x_HY,
    /// `VEX.128.66.0F38.W0 93`
    VEX_Vgatherqps_VX_Vm64x_HX,
    /// `VEX.256.66.0F38.W0 93`
    VEX_Vgatherqps_VX_Vm64y_HX,
    /// `VEX.128.66.0F38.W1 93`
    VEX_Vgatherqpd_VX_Vm64x_HX,
    /// `VEX.256.66.0F38.W1 93`
    VEX_Vgatherqpd_VY_Vm64y_HY,
    /// `VEX.NDS.128.66.0F38.W0 98`
    VEX_Vfmadd132ps_VX_HX_WX,
    /// `VEX.NDS.256.66.0F38.W0 98`
    VEX_Vfmadd132ps_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F38.W0 98`
    EVEX_Vfmadd132ps_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F38.W0 98`
    EVEX_Vfmadd132ps_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F38.W0 98`
    EVEX_Vfmadd132ps_VZ_k1z_HZ_WZ_er_b,
    /// `VEX.NDS.128.66.0F38.W1 98`
    VEX_Vfmadd132pd_VX_HX_WX,
    /// `VEX.NDS.256.66.0F38.W1 98`
    VEX_Vfmadd132pd_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F38.W1 98`
    EVEX_Vfmadd132pd_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F38.W1 98`
    EVEX_Vfmadd132pd_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F38.W1 98`
    EVEX_Vfmadd132pd_VZ_k1z_HZ_WZ_er_b,
    /// `VEX.NDS.LIG.66.0F38.W0 99`
    VEX_Vfmadd132ss_VX_HX_WX,
    /// `EVEX.NDS.LIG.66.0F38.W0 99`
    EVEX_Vfmadd132ss_VX_k1z_HX_WX_er,
    /// `VEX.NDS.LIG.66.0F38.W1 99`
    VEX_Vfmadd132sd_VX_HX_WX,
    /// `EVEX.NDS.LIG.66.0F38.W1 99`
    EVEX_Vfmadd132sd_VX_k1z_HX_WX_er,
    /// `EVEX.128.66.0F38.W0 A0`
    EVEX_Vpscatterdd_Vm32x_k1_VX,
    /// `EVEX.256.66.0F38.W0 A0`
    EVEX_Vpscatterdd_Vm32y_k1_VY,
    /// `EVEX.512.66.0F38.W0 A0`
    EVEX_Vpscatterdd_Vm32z_k1_VZ,
    /// `EVEX.128.66.0F38.W1 A0`
    EVEX_Vpscatterdq_Vm32x_k1_VX,
    /// `EVEX.256.66.0F38.W1 A0`
    EVEX_Vpscatterdq_Vm32x_k1_VY,
    /// `EVEX.512.66.0F38.W1 A0`
    EVEX_Vpscatterdq_Vm32y_k1_VZ,
    /// `EVEX.128.66.0F38.W0 A1`
    EVEX_Vpscatterqd_Vm64x_k1_VX,
    /// `EVEX.256.66.0F38.W0 A1`
    EVEX_Vpscatterqd_Vm64y_k1_VX,
    /// `EVEX.512.66.0F38.W0 A1`
    EVEX_Vpscatterqd_Vm64z_k1_VY,
    /// `EVEX.128.66.0F38.W1 A1`
    EVEX_Vpscatterqq_Vm64x_k1_VX,
    /// `EVEX.256.66.0F38.W1 A1`
    EVEX_Vpscatterqq_Vm64y_k1_VY,
    /// `EVEX.512.66.0F38.W1 A1`
    EVEX_Vpscatterqq_Vm64z_k1_VZ,
    /// `VEX.NDS.128.66.0F38.W0 A8`
    VEX_Vfmadd213ps_VX_HX_WX,
    /// `VEX.NDS.256.66.0F38.W0 A8`
    VEX_Vfmadd213ps_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F38.W0 A8`
    EVEX_Vfmadd213ps_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F38.W0 A8`
    EVEX_Vfmadd213ps_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F38.W0 A8`
    EVEX_Vfmadd213ps_VZ_k1z_HZ_WZ_er_b,
    /// `VEX.NDS.128.66.0F38.W1 A8`
    VEX_Vfmadd213pd_VX_HX_WX,
    /// `VEX.NDS.256.66.0F38.W1 A8`
    VEX_Vfmadd213pd_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F38.W1 A8`
    EVEX_Vfmadd213pd_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F38.W1 A8`
    EVEX_Vfmadd213pd_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F38.W1 A8`
    EVEX_Vfmadd213pd_VZ_k1z_HZ_WZ_er_b,
    /// `VEX.NDS.LIG.66.0F38.W0 A9`
    VEX_Vfmadd213ss_VX_HX_WX,
    /// `EVEX.NDS.LIG.66.0F38.W0 A9`
    EVEX_Vfmadd213ss_VX_k1z_HX_WX_er,
    /// `VEX.NDS.LIG.66.0F38.W1 A9`
    VEX_Vfmadd213sd_VX_HX_WX,
    /// `EVEX.NDS.LIG.66.0F38.W1 A9`
    EVEX_Vfmadd213sd_VX_k1z_HX_WX_er,
    /// `VEX.NDS.128.66.0F38.W0 B8`
    VEX_Vfmadd231ps_VX_HX_WX,
    /// `VEX.NDS.256.66.0F38.W0 B8`
    VEX_Vfmadd231ps_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F38.W0 B8`
    EVEX_Vfmadd231ps_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F38.W0 B8`
    EVEX_Vfmadd231ps_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F38.W0 B8`
    EVEX_Vfmadd231ps_VZ_k1z_HZ_WZ_er_b,
    /// `VEX.NDS.128.66.0F38.W1 B8`
    VEX_Vfmadd231pd_VX_HX_WX,
    /// `VEX.NDS.256.66.0F38.W1 B8`
    VEX_Vfmadd231pd_VY_HY_WY,
    /// `EVEX.NDS.128.66.0F38.W1 B8`
    EVEX_Vfmadd231pd_VX_k1z_HX_WX_b,
    /// `EVEX.NDS.256.66.0F38.W1 B8`
    EVEX_Vfmadd231pd_VY_k1z_HY_WY_b,
    /// `EVEX.NDS.512.66.0F38.W1 B8`
    EVEX_Vfmadd231pd_VZ_k1z_HZ_WZ_er_b,
    /// `VEX.NDS.LIG.66.0F38.W0 B9`
    VEX_Vfmadd231ss_VX_HX_WX,
    /// `EVEX.NDS.LIG.66.0F38.W0 B9`
    EVEX_Vfmadd231ss_VX_k1z_HX_WX_er,
    /// `VEX.NDS.LIG.66.0F38.W1 B9`
    VEX_Vfmadd231sd_VX_HX_WX,
    /// `EVEX.NDS.LIG.66.0F38.W1 B9`
    EVEX_Vfmadd231sd_VX_k1z_HX_WX_er,
    /// `o16 0F38F0`
    Movbe_Gw_Mw,
    /// `o32 0F38F0`
    Movbe_Gd_Md,
    /// `REX.W 0F38F0`
    Movbe_Gq_Mq,
    /// `F2 0F38F0`
    Crc32_Gd_Eb,
    /// `F2 REX.W 0F38F0`
    Crc32_Gq_Eb,
    /// `o16 0F38F1`
    Movbe_Mw_Gw,
    /// `o32 0F38F1`
    Movbe_Md_Gd,
    /// `REX.W 0F38F1`
    Movbe_Mq_Gq,
    /// `o16 F2 0F38F1`
    Crc32_Gd_Ew,
    /// `o32 F2 0F38F1`
    Crc32_Gd_Ed,
    /// `F2 REX.W 0F38F1`
    Crc32_Gq_Eq,
    /// `VEX.NDS.L0.0F38.W0 F2`
    VEX_Andn_Gd_Hd_Ed,
    /// `VEX.NDS.L0.0F38.W1 F2`
    VEX_Andn_Gq_Hq_Eq,
    /// `VEX.NDS.L0.0F38.W0 F7`
    VEX_Bextr_Gd_Ed_Hd,
    /// `VEX.NDS.L0.0F38.W1 F7`
    VEX_Bextr_Gq_Eq_Hq,
    /// `VEX.NDS.L0.66.0F38.W0 F7`
    VEX_Shlx_Gd_Ed_Hd,
    /// `VEX.NDS.L0.66.0F38.W1 F7`
    VEX_Shlx_Gq_Eq_Hq,
    /// `VEX.NDS.L0.F3.0F38.W0 F7`
    VEX_Sarx_Gd_Ed_Hd,
    /// `VEX.NDS.L0.F3.0F38.W1 F7`
    VEX_Sarx_Gq_Eq_Hq,
    /// `VEX.NDS.L0.F2.0F38.W0 F7`
    VEX_Shrx_Gd_Ed_Hd,
    /// `VEX.NDS.L0.F2.0F38.W1 F7`
    VEX_Shrx_Gq_Eq_Hq,
    /// `VEX.256.66.0F3A.W1 00`
    VEX_Vpermq_VY_WY_Ib,
    /// `EVEX.256.66.0F3A.W1 00`
    EVEX_Vpermq_VY_k1z_WY_Ib_b,
    /// `EVEX.512.66.0F3A.W1 00`
    EVEX_Vpermq_VZ_k1z_WZ_Ib_b,
    /// `EVEX.NDS.128.66.0F3A.W0 03`
    EVEX_Valignd_VX_k1z_HX_WX_Ib_b,
    /// `EVEX.NDS.256.66.0F3A.W0 03`
    EVEX_Valignd_VY_k1z_HY_WY_Ib_b,
    /// `EVEX.NDS.512.66.0F3A.W0 03`
    EVEX_Valignd_VZ_k1z_HZ_WZ_Ib_b,
    /// `EVEX.NDS.128.66.0F3A.W1 03`
    EVEX_Valignq_VX_k1z_HX_WX_Ib_b,
    /// `EVEX.NDS.256.66.0F3A.W1 03`
    EVEX_Valignq_VY_k1z_HY_WY_Ib_b,
    /// `EVEX.NDS.512.66.0F3A.W1 03`
    EVEX_Valignq_VZ_k1z_HZ_WZ_Ib_b,
    /// `0F3A0F`
    Palignr_P_Q_Ib,
    /// `66 0F3A0F`
    Palignr_VX_WX_Ib,
    /// `VEX.NDS.128.66.0F3A.WIG 0F`
    VEX_Vpalignr_VX_HX_WX_Ib,
    /// `VEX.NDS.256.66.0F3A.WIG 0F`
    VEX_Vpalignr_VY_HY_WY_Ib,
    /// `EVEX.NDS.128.66.0F3A.WIG 0F`
    EVEX_Vpalignr_VX_k1z_HX_WX_Ib,
    /// `EVEX.NDS.256.66.0F3A.WIG 0F`
    EVEX_Vpalignr_VY_k1z_HY_WY_Ib,
    /// `EVEX.NDS.512.66.0F3A.WIG 0F`
    EVEX_Vpalignr_VZ_k1z_HZ_WZ_Ib,
    /// `66 0F3A16`
    Pextrd_Ed_VX_Ib,
    /// `66 REX.W 0F3A16`
    Pextrq_Eq_VX_Ib,
    /// `VEX.128.66.0F3A.W0 16`
    VEX_Vpextrd_Ed_VX_Ib,
    /// `VEX.128.66.0F3A.W1 16`
    VEX_Vpextrq_Eq_VX_Ib,
    /// `EVEX.128.66.0F3A.W0 16`
    EVEX_Vpextrd_Ed_VX_Ib,
    /// `EVEX.128.66.0F3A.W1 16`
    EVEX_Vpextrq_Eq_VX_Ib,
    /// `VEX.NDS.256.66.0F3A.W0 18`
    VEX_Vinsertf128_VY_HY_WX_Ib,
    /// `EVEX.NDS.256.66.0F3A.W0 18`
    EVEX_Vinsertf32x4_VY_k1z_HY_WX_Ib,
    /// `EVEX.NDS.512.66.0F3A.W0 18`
    EVEX_Vinsertf32x4_VZ_k1z_HZ_WX_Ib,
    /// `EVEX.NDS.256.66.0F3A.W1 18`
    EVEX_Vinsertf64x2_VY_k1z_HY_WX_Ib,
    /// `EVEX.NDS.512.66.0F3A.W1 18`
    EVEX_Vinsertf64x2_VZ_k1z_HZ_WX_Ib,
    /// `VEX.256.66.0F3A.W0 19`
    VEX_Vextractf128_WX_VY_Ib,
    /// `EVEX.256.66.0F3A.W0 19`
    EVEX_Vextractf32x4_WX_k1z_VY_Ib,
    /// `EVEX.512.66.0F3A.W0 19`
    EVEX_Vextractf32x4_WX_k1z_VZ_Ib,
    /// `EVEX.256.66.0F3A.W1 19`
    EVEX_Vextractf64x2_WX_k1z_VY_Ib,
    /// `EVEX.512.66.0F3A.W1 19`
    EVEX_Vextractf64x2_WX_k1z_VZ_Ib,
    /// `66 0F3A20`
    Pinsrb_VX_RdMb_Ib,
    /// `66 REX.W 0F3A20`
    Pinsrb_VX_RqMb_Ib,
    /// `VEX.NDS.128.66.0F3A.W0 20`
    VEX_Vpinsrb_VX_HX_RdMb_Ib,
    /// `VEX.NDS.128.66.0F3A.W1 20`
    VEX_Vpinsrb_VX_HX_RqMb_Ib,
    /// `EVEX.NDS.128.66.0F3A.W0 20`
    EVEX_Vpinsrb_VX_HX_RdMb_Ib,
    /// `EVEX.NDS.128.66.0F3A.W1 20`
    EVEX_Vpinsrb_VX_HX_RqMb_Ib,
    /// `EVEX.NDS.128.66.0F3A.W0 25`
    EVEX_Vpternlogd_VX_k1z_HX_WX_Ib_b,
    /// `EVEX.NDS.256.66.0F3A.W0 25`
    EVEX_Vpternlogd_VY_k1z_HY_WY_Ib_b,
    /// `EVEX.NDS.512.66.0F3A.W0 25`
    EVEX_Vpternlogd_VZ_k1z_HZ_WZ_Ib_b,
    /// `EVEX.NDS.128.66.0F3A.W1 25`
    EVEX_Vpternlogq_VX_k1z_HX_WX_Ib_b,
    /// `EVEX.NDS.256.66.0F3A.W1 25`
    EVEX_Vpternlogq_VY_k1z_HY_WY_Ib_b,
    /// `EVEX.NDS.512.66.0F3A.W1 25`
    EVEX_Vpternlogq_VZ_k1z_HZ_WZ_Ib_b,
}

impl Code {
    /// Returns the variant name, e.g. `"Add_Eb_Gb"`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Returns true for [`Code::INVALID`].
    pub const fn is_invalid(self) -> bool {
        matches!(self, Self::INVALID)
    }

    /// Returns true if this code belongs to a VEX-encoded instruction.
    pub fn is_vex(self) -> bool {
        self.name().starts_with("VEX_")
    }

    /// Returns true if this code belongs to an EVEX-encoded instruction.
    pub fn is_evex(self) -> bool {
        self.name().starts_with("EVEX_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_invalid_is_default() {
        assert_eq!(Code::default(), Code::INVALID);
        assert!(Code::INVALID.is_invalid());
        assert_eq!(Code::INVALID as u16, 0);
    }

    #[test]
    fn test_names() {
        assert_eq!(Code::Add_Eb_Gb.name(), "Add_Eb_Gb");
        assert_eq!(Code::Pmovsxbw_VX_WX.name(), "Pmovsxbw_VX_WX");
        assert!(Code::VEX_Vpmovsxbw_VX_WX.is_vex());
        assert!(Code::EVEX_Vpmovsxbw_VX_k1z_WX.is_evex());
        assert!(!Code::EVEX_Vpmovsxbw_VX_k1z_WX.is_vex());
    }

    #[test]
    fn test_discriminants_are_dense() {
        for (i, code) in Code::iter().enumerate() {
            assert_eq!(code as usize, i);
        }
        assert_eq!(Code::iter().count(), Code::COUNT);
    }
}
