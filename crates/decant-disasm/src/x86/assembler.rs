//! Builds the [`Instruction`] record from a selected template.
//!
//! Runs after dispatch: checks the mode and prefix rules of the template,
//! resolves the code and the operands, then reads the remaining
//! displacement and immediate bytes.

use decant_core::{Bitness, Code, EncodingKind, Instruction, MemoryOperand, MemorySize, OpKind, Register};

use super::cursor::ByteCursor;
use super::dispatch::Selected;
use super::immediate::{read_branch, read_far_pointer, read_immediate, read_moffs};
use super::modrm::{decode_memory, AddressContext, ModRm};
use super::opcodes::{CodeSel, Op, Template};
use super::operand_size::{address_size, gpr, gpr8, memory_size, nth, operand_size, vector_operand_size, OpSize};
use super::prefix::Prefixes;
use super::vex::{EvexAttributes, VexFields, VexKind};
use crate::DecodeError;

/// Register number extensions in effect for one instruction.
#[derive(Debug, Clone, Copy, Default)]
struct Extensions {
    /// ModRM.reg
    r: u8,
    /// SIB index
    x: u8,
    /// ModRM.rm, SIB base and opcode register
    b: u8,
    /// EVEX.R', vector registers in ModRM.reg only
    r_hi: u8,
    /// EVEX.X, vector registers in ModRM.rm only
    rm_hi: u8,
    vvvv: u8,
}

impl Extensions {
    fn legacy(prefixes: &Prefixes) -> Self {
        let rex = prefixes.rex.unwrap_or_default();
        Self {
            r: u8::from(rex.r) * 8,
            x: u8::from(rex.x) * 8,
            b: u8::from(rex.b) * 8,
            ..Self::default()
        }
    }

    fn vector(fields: &VexFields) -> Self {
        Self {
            r: fields.r,
            x: fields.x,
            b: fields.b,
            r_hi: fields.r_hi,
            rm_hi: fields.rm_hi,
            vvvv: fields.vvvv,
        }
    }
}

/// Per-instruction state shared by the operand builders.
struct Assembler<'c, 'a> {
    cursor: &'c mut ByteCursor<'a>,
    prefixes: &'c Prefixes,
    selected: &'c Selected,
    ip: u64,
    opsize: OpSize,
    addr_size: OpSize,
    ext: Extensions,
    instr: Instruction,
}

/// Finishes decoding `selected` and returns the instruction.
///
/// `cursor` must be positioned right after the ModRM byte, or after the
/// opcode if the template has none.
pub fn assemble(
    cursor: &mut ByteCursor<'_>,
    bitness: Bitness,
    ip: u64,
    prefixes: &Prefixes,
    selected: &Selected,
) -> Result<Instruction, DecodeError> {
    let template = selected.template;
    let reg_form = selected.is_register_form();

    let (opsize, ext, evex) = match selected.vector {
        Some((vec, fields)) => {
            if prefixes.lock {
                return Err(DecodeError::invalid("LOCK prefix on a VEX/EVEX instruction"));
            }
            fields.check_vvvv(vec)?;
            let evex = if fields.is_evex() {
                Some(fields.resolve_evex(vec, reg_form)?)
            } else {
                None
            };
            (vector_operand_size(bitness, fields.w), Extensions::vector(&fields), evex)
        }
        None => {
            check_legacy(template, bitness, prefixes, selected.modrm)?;
            let opsize = operand_size(bitness, prefixes, selected.operand_size_prefix, template);
            (opsize, Extensions::legacy(prefixes), None)
        }
    };

    let mut asm = Assembler {
        cursor,
        prefixes,
        selected,
        ip,
        opsize,
        addr_size: address_size(bitness, prefixes),
        ext,
        instr: Instruction::new(bitness, ip),
    };

    let code = asm.code()?;
    asm.instr.set_code(code);
    asm.instr.set_encoding(match selected.vector {
        Some((_, fields)) if fields.kind == VexKind::Evex => EncodingKind::Evex,
        Some(_) => EncodingKind::Vex,
        None => EncodingKind::Legacy,
    });

    // SIB and displacement come before any immediate
    if let Some(modrm) = selected.modrm.filter(|m| !m.is_register()) {
        asm.modrm_memory(modrm, evex)?;
    }
    for (n, op) in template.ops.iter().enumerate() {
        asm.operand(n, *op)?;
    }
    if template.vsib_index().is_some() {
        asm.check_gather_registers()?;
    }

    if let Some(attrs) = evex {
        asm.instr.set_op_mask(attrs.op_mask);
        asm.instr.set_zeroing_masking(attrs.zeroing);
        asm.instr.set_rounding_control(attrs.rounding);
        asm.instr.set_suppress_all_exceptions(attrs.sae);
        asm.instr.set_broadcast(attrs.broadcast);
    }
    asm.instr.set_lock_prefix(prefixes.lock);
    asm.instr.set_repe_prefix(prefixes.repe);
    asm.instr.set_repne_prefix(prefixes.repne);
    asm.instr.set_segment_prefix(prefixes.segment);
    asm.instr.set_len(asm.cursor.consumed_len());
    Ok(asm.instr)
}

/// Mode, form and LOCK rules of a legacy template.
fn check_legacy(
    template: &Template,
    bitness: Bitness,
    prefixes: &Prefixes,
    modrm: Option<ModRm>,
) -> Result<(), DecodeError> {
    if template.not_64 && bitness.is_64bit() {
        return Err(DecodeError::invalid("instruction not valid in 64-bit mode"));
    }
    if template.only_64 && !bitness.is_64bit() {
        return Err(DecodeError::invalid("instruction only valid in 64-bit mode"));
    }
    let reg_form = modrm.is_some_and(|m| m.is_register());
    if template.mem_only && reg_form {
        return Err(DecodeError::invalid("register operand on a memory-only form"));
    }
    if template.reg_only && modrm.is_some_and(|m| !m.is_register()) {
        return Err(DecodeError::invalid("memory operand on a register-only form"));
    }
    if prefixes.lock && (!template.lock || modrm.is_none() || reg_form) {
        return Err(DecodeError::invalid("LOCK prefix not allowed"));
    }
    Ok(())
}

impl Assembler<'_, '_> {
    fn code(&self) -> Result<Code, DecodeError> {
        let size = self.opsize.index();
        let code = match self.selected.template.code {
            CodeSel::Fixed(code) => code,
            CodeSel::Sized(codes) => codes[size],
            CodeSel::SizedRexB(codes) => codes[size * 2 + usize::from(self.prefixes.rex_b())],
            CodeSel::Byte(codes) => match self.prefixes.rex {
                None => codes[0],
                Some(rex) if rex.b => codes[2],
                Some(_) => codes[1],
            },
            CodeSel::ByAddr(codes) => codes[self.addr_size.index()],
            CodeSel::ByAddrOp(codes) => {
                let i = match (self.addr_size, self.opsize) {
                    (OpSize::W16, OpSize::W16) => 0,
                    (OpSize::W16, _) => 1,
                    (OpSize::W32, OpSize::W16) => 2,
                    (OpSize::W32, OpSize::W32) => 3,
                    (OpSize::W32, OpSize::W64) => 4,
                    (OpSize::W64, _) => 5,
                };
                codes[i]
            }
        };
        if code.is_invalid() {
            return Err(DecodeError::invalid("no form for this operand size"));
        }
        Ok(code)
    }

    fn rex_present(&self) -> bool {
        self.prefixes.rex.is_some()
    }

    fn modrm(&self) -> Result<ModRm, DecodeError> {
        self.selected
            .modrm
            .ok_or(DecodeError::invalid("operand needs a ModRM byte"))
    }

    /// Segment of an implicit `DS`-relative operand.
    fn data_segment(&self) -> Register {
        match self.prefixes.segment {
            Register::None => Register::DS,
            seg => seg,
        }
    }

    fn modrm_memory(&mut self, modrm: ModRm, evex: Option<EvexAttributes>) -> Result<(), DecodeError> {
        let size = match (self.selected.vector, evex) {
            (Some((vec, _)), Some(attrs)) if attrs.broadcast => vec.broadcast.unwrap_or(MemorySize::Unknown),
            _ => memory_size(self.selected.template, self.opsize),
        };
        // EVEX disp8 is scaled by the size of the memory access
        let disp8_scale = if evex.is_some() { size.size().max(1) as u32 } else { 1 };
        let vsib = self.selected.template.vsib_index();
        // EVEX.V' is bit 4 of a VSIB index
        let index_ext = match vsib {
            Some(_) => self.ext.x | (self.ext.vvvv & 0x10),
            None => self.ext.x,
        };
        let ctx = AddressContext {
            address_size: self.addr_size,
            long_mode: self.instr.bitness().is_64bit(),
            segment_override: self.prefixes.segment,
            index_ext,
            base_ext: self.ext.b,
            disp8_scale,
            size,
            vsib,
        };
        let mem = decode_memory(self.cursor, modrm, &ctx)?;
        self.instr.set_memory(mem);
        Ok(())
    }

    fn set_register(&mut self, n: usize, reg: Register) {
        self.instr.set_op(n, OpKind::Register, reg);
    }

    /// ModRM.rm operand: `reg` for register forms, memory otherwise.
    fn rm(&mut self, n: usize, reg: impl FnOnce(u8) -> Register) -> Result<(), DecodeError> {
        let modrm = self.modrm()?;
        if modrm.is_register() {
            self.set_register(n, reg(modrm.rm));
        } else {
            self.instr.set_op(n, OpKind::Memory, Register::None);
        }
        Ok(())
    }

    fn operand(&mut self, n: usize, op: Op) -> Result<(), DecodeError> {
        let ext = self.ext;
        let opsize = self.opsize;
        let rex = self.rex_present();
        match op {
            Op::Eb => self.rm(n, |rm| gpr8(rm | ext.b, rex))?,
            Op::Ew => self.rm(n, |rm| gpr(OpSize::W16, rm | ext.b))?,
            Op::Ev => self.rm(n, |rm| gpr(opsize, rm | ext.b))?,
            Op::Ey => self.rm(n, |rm| gpr(opsize.at_least_32(), rm | ext.b))?,
            Op::Ez => self.rm(n, |rm| gpr(opsize.at_most_32(), rm | ext.b))?,
            Op::Rd => self.rm(n, |rm| gpr(OpSize::W32, rm | ext.b))?,
            Op::M | Op::VsibX | Op::VsibY | Op::VsibZ => self.rm(n, |_| Register::None)?,
            Op::Gb => {
                let reg = self.modrm()?.reg | ext.r;
                self.set_register(n, gpr8(reg, rex));
            }
            Op::Gw | Op::Gd | Op::Gv | Op::Gy => {
                let size = match op {
                    Op::Gw => OpSize::W16,
                    Op::Gd => OpSize::W32,
                    Op::Gy => opsize.at_least_32(),
                    _ => opsize,
                };
                let reg = self.modrm()?.reg | ext.r;
                self.set_register(n, gpr(size, reg));
            }
            Op::Hy => {
                if ext.vvvv > 15 {
                    return Err(DecodeError::invalid("vvvv out of range for a general purpose register"));
                }
                self.set_register(n, gpr(opsize.at_least_32(), ext.vvvv));
            }
            Op::Zb => {
                let reg = (self.selected.opcode & 7) | ext.b;
                self.set_register(n, gpr8(reg, rex));
            }
            Op::Zv => {
                let reg = (self.selected.opcode & 7) | ext.b;
                self.set_register(n, gpr(opsize, reg));
            }
            Op::Sw => {
                let reg = self.modrm()?.reg;
                if reg > 5 {
                    return Err(DecodeError::invalid("reserved segment register"));
                }
                let seg = nth(Register::ES, reg);
                if n == 0 && seg == Register::CS {
                    return Err(DecodeError::invalid("CS is not a valid destination"));
                }
                self.set_register(n, seg);
            }
            Op::Reg(reg) => self.set_register(n, reg),
            Op::AccV => self.set_register(n, gpr(opsize, 0)),
            Op::AccZ => self.set_register(n, gpr(opsize.at_most_32(), 0)),
            Op::Ib | Op::Ibs | Op::Iw | Op::Iz | Op::Iv | Op::Ib2 | Op::One => {
                if let Some(imm) = read_immediate(self.cursor, op, opsize)? {
                    if op == Op::Ib2 {
                        self.instr.set_immediate_2nd(imm.value as u8);
                    } else {
                        self.instr.set_immediate(imm.value);
                    }
                    self.instr.set_op(n, imm.kind, Register::None);
                }
            }
            Op::Jb | Op::Jz => {
                let (kind, target) = read_branch(self.cursor, op, opsize, self.ip)?;
                self.instr.set_near_branch(target);
                self.instr.set_op(n, kind, Register::None);
            }
            Op::Ap => {
                let (kind, offset, selector) = read_far_pointer(self.cursor, opsize)?;
                self.instr.set_far_branch(offset, selector);
                self.instr.set_op(n, kind, Register::None);
            }
            Op::O => self.moffs(n)?,
            Op::Xs => {
                let kind = match self.addr_size {
                    OpSize::W16 => OpKind::MemorySegSI,
                    OpSize::W32 => OpKind::MemorySegESI,
                    OpSize::W64 => OpKind::MemorySegRSI,
                };
                let mut mem = self.implicit_memory();
                mem.segment = self.data_segment();
                self.instr.set_memory(mem);
                self.instr.set_op(n, kind, Register::None);
            }
            Op::Ys => {
                let kind = match self.addr_size {
                    OpSize::W16 => OpKind::MemoryESDI,
                    OpSize::W32 => OpKind::MemoryESEDI,
                    OpSize::W64 => OpKind::MemoryESRDI,
                };
                let mut mem = self.implicit_memory();
                if mem.segment == Register::None {
                    mem.segment = Register::ES;
                }
                self.instr.set_memory(mem);
                self.instr.set_op(n, kind, Register::None);
            }
            Op::Xlat => {
                let mut mem = self.implicit_memory();
                mem.segment = self.data_segment();
                mem.base = gpr(self.addr_size, 3);
                mem.index = Register::AL;
                self.instr.set_memory(mem);
                self.instr.set_op(n, OpKind::Memory, Register::None);
            }
            Op::St0 => self.set_register(n, Register::ST0),
            Op::Sti => {
                let rm = self.modrm()?.rm;
                self.set_register(n, nth(Register::ST0, rm));
            }
            Op::P => {
                let reg = self.modrm()?.reg;
                self.set_register(n, nth(Register::MM0, reg));
            }
            Op::Q | Op::N => self.rm(n, |rm| nth(Register::MM0, rm))?,
            Op::VX | Op::VY | Op::VZ => {
                let reg = self.modrm()?.reg | ext.r | ext.r_hi;
                self.set_register(n, nth(vector_class(op), reg));
            }
            Op::HX | Op::HY | Op::HZ => self.set_register(n, nth(vector_class(op), ext.vvvv)),
            Op::WX | Op::WY | Op::WZ | Op::RX => {
                let first = vector_class(op);
                self.rm(n, |rm| nth(first, rm | ext.b | ext.rm_hi))?;
            }
            Op::VK => {
                let reg = self.modrm()?.reg;
                self.set_register(n, nth(Register::K0, reg));
            }
            Op::HK => {
                if ext.vvvv > 7 {
                    return Err(DecodeError::invalid("vvvv out of range for an opmask register"));
                }
                self.set_register(n, nth(Register::K0, ext.vvvv));
            }
            Op::RK | Op::WK => self.rm(n, |rm| nth(Register::K0, rm))?,
        }
        Ok(())
    }

    /// A gather needs distinct destination, index and mask registers.
    /// Scatters store through memory and are not checked.
    fn check_gather_registers(&self) -> Result<(), DecodeError> {
        if self.instr.op_kind(0) != OpKind::Register {
            return Ok(());
        }
        let dest = self.instr.op_register(0).number();
        let index = self.instr.memory_index().number();
        // VEX gathers carry the mask as the third operand
        let mask = match self.instr.op_register(2) {
            Register::None => None,
            reg => Some(reg.number()),
        };
        if dest == index || mask.is_some_and(|m| m == dest || m == index) {
            return Err(DecodeError::invalid("VSIB gather registers overlap"));
        }
        Ok(())
    }

    /// Memory descriptor for operands addressed without ModRM.
    fn implicit_memory(&self) -> MemoryOperand {
        let mut mem = self.instr.memory_operand();
        mem.scale = 1;
        mem.size = memory_size(self.selected.template, self.opsize);
        mem
    }

    fn moffs(&mut self, n: usize) -> Result<(), DecodeError> {
        let offset = read_moffs(self.cursor, self.addr_size)?;
        let mut mem = self.implicit_memory();
        mem.segment = self.data_segment();
        mem.displacement = offset;
        let kind = match self.addr_size {
            OpSize::W16 => {
                mem.displ_size = 2;
                OpKind::Memory
            }
            OpSize::W32 => {
                mem.displ_size = 4;
                OpKind::Memory
            }
            OpSize::W64 => {
                mem.displ_size = 8;
                self.instr.set_memory_address64(offset);
                OpKind::Memory64
            }
        };
        self.instr.set_memory(mem);
        self.instr.set_op(n, kind, Register::None);
        Ok(())
    }
}

fn vector_class(op: Op) -> Register {
    match op {
        Op::VY | Op::HY | Op::WY => Register::YMM0,
        Op::VZ | Op::HZ | Op::WZ => Register::ZMM0,
        _ => Register::XMM0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::x86::dispatch::dispatch;

    fn decode(bytes: &[u8], bitness: Bitness) -> Result<Instruction, DecodeError> {
        let mut cursor = ByteCursor::new(bytes, 0);
        let (mut prefixes, first) = Prefixes::scan(&mut cursor, bitness)?;
        let selected = dispatch(&mut cursor, bitness, &mut prefixes, first)?;
        assemble(&mut cursor, bitness, 0x1000, &prefixes, &selected)
    }

    #[test]
    fn test_rex_byte_registers() {
        // mov sil, al needs REX to reach SIL
        let instr = decode(&[0x40, 0x88, 0xC6], Bitness::Bits64).unwrap();
        assert_eq!(instr.code(), Code::Mov_Eb_Gb);
        assert_eq!(instr.op_register(0), Register::SIL);
        assert_eq!(instr.op_register(1), Register::AL);

        let instr = decode(&[0x88, 0xC6], Bitness::Bits64).unwrap();
        assert_eq!(instr.op_register(0), Register::DH);
    }

    #[test]
    fn test_sized_code_selection() {
        let instr = decode(&[0x66, 0x01, 0xC8], Bitness::Bits64).unwrap();
        assert_eq!(instr.code(), Code::Add_Ew_Gw);
        assert_eq!(instr.op_register(0), Register::AX);

        let instr = decode(&[0x49, 0x01, 0xC8], Bitness::Bits64).unwrap();
        assert_eq!(instr.code(), Code::Add_Eq_Gq);
        assert_eq!(instr.op_register(0), Register::R8);
    }

    #[test]
    fn test_opcode_register_with_rex_b() {
        let instr = decode(&[0x41, 0x5F], Bitness::Bits64).unwrap();
        assert_eq!(instr.code(), Code::Pop_R15);
        assert_eq!(instr.op_register(0), Register::R15);

        let instr = decode(&[0x41, 0xB4, 0x01], Bitness::Bits64).unwrap();
        assert_eq!(instr.code(), Code::Mov_R12L_Ib);
        assert_eq!(instr.op_register(0), Register::R12L);
    }

    #[test]
    fn test_lock_rules() {
        let instr = decode(&[0xF0, 0x01, 0x08], Bitness::Bits32).unwrap();
        assert!(instr.has_lock_prefix());
        assert_eq!(
            decode(&[0xF0, 0x01, 0xC8], Bitness::Bits32).unwrap_err(),
            DecodeError::invalid("LOCK prefix not allowed")
        );
        assert_eq!(
            decode(&[0xF0, 0x90], Bitness::Bits32).unwrap_err(),
            DecodeError::invalid("LOCK prefix not allowed")
        );
    }

    #[test]
    fn test_mode_restrictions() {
        assert_eq!(
            decode(&[0x60], Bitness::Bits64).unwrap_err(),
            DecodeError::invalid("instruction not valid in 64-bit mode")
        );
        assert_eq!(
            decode(&[0x0F, 0x01, 0xF8], Bitness::Bits32).unwrap_err(),
            DecodeError::invalid("instruction only valid in 64-bit mode")
        );
        // LEA with a register operand
        assert_eq!(
            decode(&[0x8D, 0xC0], Bitness::Bits32).unwrap_err(),
            DecodeError::invalid("register operand on a memory-only form")
        );
    }

    #[test]
    fn test_segment_register_operand() {
        let instr = decode(&[0x8E, 0xD8], Bitness::Bits32).unwrap();
        assert_eq!(instr.op_register(0), Register::DS);
        assert_eq!(
            decode(&[0x8E, 0xC8], Bitness::Bits32).unwrap_err(),
            DecodeError::invalid("CS is not a valid destination")
        );
        assert_eq!(
            decode(&[0x8C, 0xF0], Bitness::Bits32).unwrap_err(),
            DecodeError::invalid("reserved segment register")
        );
    }

    #[test]
    fn test_moffs() {
        let instr = decode(&[0xA1, 1, 2, 3, 4, 5, 6, 7, 8], Bitness::Bits64).unwrap();
        assert_eq!(instr.code(), Code::Mov_EAX_Od);
        assert_eq!(instr.op_kind(1), OpKind::Memory64);
        assert_eq!(instr.memory_address64(), 0x0807_0605_0403_0201);
        assert_eq!(instr.memory_size(), MemorySize::UInt32);
        assert_eq!(instr.memory_segment(), Register::DS);
        assert_eq!(instr.len(), 9);

        let instr = decode(&[0x64, 0xA0, 0x34, 0x12], Bitness::Bits16).unwrap();
        assert_eq!(instr.op_kind(1), OpKind::Memory);
        assert_eq!(instr.memory_displacement(), 0x1234);
        assert_eq!(instr.memory_displ_size(), 2);
        assert_eq!(instr.memory_segment(), Register::FS);
    }

    #[test]
    fn test_string_operands() {
        let instr = decode(&[0xA4], Bitness::Bits32).unwrap();
        assert_eq!(instr.code(), Code::Movsb_Yb_Xb);
        assert_eq!(instr.op_kind(0), OpKind::MemoryESEDI);
        assert_eq!(instr.op_kind(1), OpKind::MemorySegESI);
        assert_eq!(instr.memory_segment(), Register::DS);

        let instr = decode(&[0xF3, 0x48, 0xAB], Bitness::Bits64).unwrap();
        assert_eq!(instr.code(), Code::Stosq_Yq_RAX);
        assert_eq!(instr.op_kind(0), OpKind::MemoryESRDI);
        assert_eq!(instr.memory_segment(), Register::ES);
        assert_eq!(instr.memory_size(), MemorySize::UInt64);
        assert!(instr.has_repe_prefix());
    }

    #[test]
    fn test_xlat() {
        let instr = decode(&[0xD7], Bitness::Bits64).unwrap();
        assert_eq!(instr.memory_base(), Register::RBX);
        assert_eq!(instr.memory_index(), Register::AL);
        assert_eq!(instr.memory_size(), MemorySize::UInt8);
    }

    #[test]
    fn test_immediate_follows_displacement() {
        // add dword [eax+0x10], 0x12345678
        let instr = decode(&[0x81, 0x40, 0x10, 0x78, 0x56, 0x34, 0x12], Bitness::Bits32).unwrap();
        assert_eq!(instr.memory_displacement(), 0x10);
        assert_eq!(instr.op_kind(1), OpKind::Immediate32);
        assert_eq!(instr.immediate32(), 0x1234_5678);
        assert_eq!(instr.len(), 7);
    }

    #[test]
    fn test_relative_branch() {
        let instr = decode(&[0xE8, 0x00, 0x01, 0x00, 0x00], Bitness::Bits64).unwrap();
        assert_eq!(instr.code(), Code::Call_Jd64);
        assert_eq!(instr.op_kind(0), OpKind::NearBranch64);
        assert_eq!(instr.near_branch64(), 0x1105);
    }

    #[test]
    fn test_far_pointer() {
        let instr = decode(&[0xEA, 0x78, 0x56, 0x34, 0x12, 0x08, 0x00], Bitness::Bits32).unwrap();
        assert_eq!(instr.code(), Code::Jmp_Adw);
        assert_eq!(instr.op_kind(0), OpKind::FarBranch32);
        assert_eq!(instr.far_branch32(), 0x1234_5678);
        assert_eq!(instr.far_branch_selector(), 8);
    }

    #[test]
    fn test_enter_two_immediates() {
        let instr = decode(&[0xC8, 0x10, 0x00, 0x01], Bitness::Bits32).unwrap();
        assert_eq!(instr.op_kind(0), OpKind::Immediate16);
        assert_eq!(instr.op_kind(1), OpKind::Immediate8_2nd);
        assert_eq!(instr.immediate16(), 0x10);
        assert_eq!(instr.immediate8_2nd(), 1);
    }

    #[test]
    fn test_evex_attributes_applied() {
        let instr = decode(&[0x62, 0xF2, 0x7D, 0x8B, 0x20, 0x50, 0x01], Bitness::Bits16).unwrap();
        assert_eq!(instr.encoding(), EncodingKind::Evex);
        assert_eq!(instr.op_mask(), Register::K3);
        assert!(instr.zeroing_masking());
        assert_eq!(instr.memory_displacement(), 8);
    }

    #[test]
    fn test_vex_lock_rejected() {
        assert_eq!(
            decode(&[0xF0, 0xC5, 0xF8, 0x10, 0x00], Bitness::Bits64).unwrap_err(),
            DecodeError::invalid("LOCK prefix on a VEX/EVEX instruction")
        );
    }
}
