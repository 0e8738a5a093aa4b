//! The decoded instruction record.

use crate::{Bitness, Code, EncodingKind, MemoryOperand, MemorySize, OpKind, Register, RoundingControl};

/// Maximum number of explicit operands.
pub const MAX_OP_COUNT: usize = 4;

/// A decoded x86 instruction.
///
/// Produced by the decoder; the setters exist so that the decoder crate can
/// fill the record in, callers normally only read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    code: Code,
    bitness: Bitness,
    encoding: EncodingKind,
    ip: u64,
    len: u8,
    op_count: u8,
    op_kinds: [OpKind; MAX_OP_COUNT],
    op_registers: [Register; MAX_OP_COUNT],
    memory: MemoryOperand,
    memory_address64: u64,
    immediate: u64,
    immediate_2nd: u8,
    near_branch: u64,
    far_branch: u32,
    far_selector: u16,
    lock: bool,
    repe: bool,
    repne: bool,
    segment_prefix: Register,
    op_mask: Register,
    zeroing_masking: bool,
    rounding_control: RoundingControl,
    suppress_all_exceptions: bool,
    broadcast: bool,
}

impl Default for Instruction {
    fn default() -> Self {
        Self::new(Bitness::Bits64, 0)
    }
}

impl Instruction {
    /// Creates an empty, invalid instruction at `ip`.
    pub fn new(bitness: Bitness, ip: u64) -> Self {
        Self {
            code: Code::INVALID,
            bitness,
            encoding: EncodingKind::Legacy,
            ip,
            len: 0,
            op_count: 0,
            op_kinds: [OpKind::None; MAX_OP_COUNT],
            op_registers: [Register::None; MAX_OP_COUNT],
            memory: MemoryOperand::default(),
            memory_address64: 0,
            immediate: 0,
            immediate_2nd: 0,
            near_branch: 0,
            far_branch: 0,
            far_selector: 0,
            lock: false,
            repe: false,
            repne: false,
            segment_prefix: Register::None,
            op_mask: Register::None,
            zeroing_masking: false,
            rounding_control: RoundingControl::None,
            suppress_all_exceptions: false,
            broadcast: false,
        }
    }

    /// Creates an invalid instruction covering `len` bytes.
    pub fn invalid(bitness: Bitness, ip: u64, len: usize) -> Self {
        let mut instr = Self::new(bitness, ip);
        instr.set_len(len);
        instr
    }

    // ---- identity ----

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn bitness(&self) -> Bitness {
        self.bitness
    }

    /// Legacy, VEX or EVEX.
    pub fn encoding(&self) -> EncodingKind {
        self.encoding
    }

    /// Returns true if the bytes did not form a valid instruction.
    pub fn is_invalid(&self) -> bool {
        self.code.is_invalid()
    }

    /// Address of the first byte.
    pub fn ip(&self) -> u64 {
        self.ip
    }

    /// Address of the following instruction, wrapped to the mode's width.
    pub fn next_ip(&self) -> u64 {
        self.ip.wrapping_add(self.len as u64) & self.bitness.ip_mask()
    }

    /// Number of bytes consumed.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ---- operands ----

    pub fn op_count(&self) -> u32 {
        self.op_count as u32
    }

    /// Kind of operand `n`; slots past [`op_count`](Self::op_count) are
    /// [`OpKind::None`].
    pub fn op_kind(&self, n: u32) -> OpKind {
        self.op_kinds.get(n as usize).copied().unwrap_or_default()
    }

    /// All four operand kinds.
    pub fn op_kinds(&self) -> [OpKind; MAX_OP_COUNT] {
        self.op_kinds
    }

    /// Register held by operand `n`, or [`Register::None`] when the slot is
    /// not a register.
    pub fn op_register(&self, n: u32) -> Register {
        self.op_registers.get(n as usize).copied().unwrap_or_default()
    }

    /// Returns true if any operand slot accesses memory.
    pub fn has_memory_operand(&self) -> bool {
        self.op_kinds.iter().any(|k| k.is_memory())
    }

    // ---- memory ----

    /// The shared memory operand descriptor.
    pub fn memory_operand(&self) -> MemoryOperand {
        self.memory
    }

    pub fn memory_segment(&self) -> Register {
        self.memory.segment
    }

    pub fn memory_base(&self) -> Register {
        self.memory.base
    }

    pub fn memory_index(&self) -> Register {
        self.memory.index
    }

    pub fn memory_index_scale(&self) -> u32 {
        self.memory.scale
    }

    /// Low 32 bits of the displacement.
    pub fn memory_displacement(&self) -> u32 {
        self.memory.displacement as u32
    }

    /// The displacement, sign-extended for 64-bit addressing.
    pub fn memory_displacement64(&self) -> u64 {
        self.memory.displacement
    }

    pub fn memory_displ_size(&self) -> u32 {
        self.memory.displ_size
    }

    pub fn memory_size(&self) -> MemorySize {
        self.memory.size
    }

    /// Absolute address of an [`OpKind::Memory64`] operand.
    pub fn memory_address64(&self) -> u64 {
        self.memory_address64
    }

    /// Effective address of an `RIP`/`EIP`-relative memory operand.
    pub fn ip_rel_memory_address(&self) -> u64 {
        let target = self.next_ip().wrapping_add(self.memory.displacement);
        if self.memory.base == Register::EIP {
            target & 0xFFFF_FFFF
        } else {
            target
        }
    }

    // ---- immediates ----

    pub fn immediate8(&self) -> u8 {
        self.immediate as u8
    }

    pub fn immediate8_2nd(&self) -> u8 {
        self.immediate_2nd
    }

    pub fn immediate16(&self) -> u16 {
        self.immediate as u16
    }

    pub fn immediate32(&self) -> u32 {
        self.immediate as u32
    }

    pub fn immediate64(&self) -> u64 {
        self.immediate
    }

    pub fn immediate8to16(&self) -> i16 {
        self.immediate as u8 as i8 as i16
    }

    pub fn immediate8to32(&self) -> i32 {
        self.immediate as u8 as i8 as i32
    }

    pub fn immediate8to64(&self) -> i64 {
        self.immediate as u8 as i8 as i64
    }

    pub fn immediate32to64(&self) -> i64 {
        self.immediate as u32 as i32 as i64
    }

    /// Value of immediate operand `n`, sign-extended to 64 bits for the
    /// `*to*` kinds. Returns 0 if the slot is not an immediate.
    pub fn immediate(&self, n: u32) -> u64 {
        match self.op_kind(n) {
            OpKind::Immediate8 => self.immediate8() as u64,
            OpKind::Immediate8_2nd => self.immediate_2nd as u64,
            OpKind::Immediate16 => self.immediate16() as u64,
            OpKind::Immediate32 => self.immediate32() as u64,
            OpKind::Immediate64 => self.immediate,
            OpKind::Immediate8to16 => self.immediate8to16() as i64 as u64,
            OpKind::Immediate8to32 => self.immediate8to32() as i64 as u64,
            OpKind::Immediate8to64 => self.immediate8to64() as u64,
            OpKind::Immediate32to64 => self.immediate32to64() as u64,
            _ => 0,
        }
    }

    // ---- branches ----

    pub fn near_branch16(&self) -> u16 {
        self.near_branch as u16
    }

    pub fn near_branch32(&self) -> u32 {
        self.near_branch as u32
    }

    pub fn near_branch64(&self) -> u64 {
        self.near_branch
    }

    /// Target of the first near-branch operand, if any.
    pub fn near_branch_target(&self) -> Option<u64> {
        self.op_kinds.iter().find_map(|kind| match kind {
            OpKind::NearBranch16 => Some(self.near_branch16() as u64),
            OpKind::NearBranch32 => Some(self.near_branch32() as u64),
            OpKind::NearBranch64 => Some(self.near_branch),
            _ => None,
        })
    }

    pub fn far_branch16(&self) -> u16 {
        self.far_branch as u16
    }

    pub fn far_branch32(&self) -> u32 {
        self.far_branch
    }

    pub fn far_branch_selector(&self) -> u16 {
        self.far_selector
    }

    // ---- prefixes ----

    pub fn has_lock_prefix(&self) -> bool {
        self.lock
    }

    pub fn has_repe_prefix(&self) -> bool {
        self.repe
    }

    pub fn has_repne_prefix(&self) -> bool {
        self.repne
    }

    /// Segment override prefix, or [`Register::None`].
    pub fn segment_prefix(&self) -> Register {
        self.segment_prefix
    }

    // ---- EVEX ----

    /// `K1`..`K7`, or [`Register::None`] when unmasked.
    pub fn op_mask(&self) -> Register {
        self.op_mask
    }

    pub fn has_op_mask(&self) -> bool {
        self.op_mask != Register::None
    }

    pub fn zeroing_masking(&self) -> bool {
        self.zeroing_masking
    }

    pub fn merging_masking(&self) -> bool {
        !self.zeroing_masking
    }

    pub fn rounding_control(&self) -> RoundingControl {
        self.rounding_control
    }

    pub fn suppress_all_exceptions(&self) -> bool {
        self.suppress_all_exceptions
    }

    /// Returns true if the memory operand is an EVEX embedded broadcast.
    pub fn is_broadcast(&self) -> bool {
        self.broadcast
    }

    // ---- setters used by the decoder ----

    pub fn set_code(&mut self, code: Code) {
        self.code = code;
    }

    pub fn set_encoding(&mut self, encoding: EncodingKind) {
        self.encoding = encoding;
    }

    pub fn set_ip(&mut self, ip: u64) {
        self.ip = ip;
    }

    /// Sets the byte length; values above 15 are clamped.
    pub fn set_len(&mut self, len: usize) {
        self.len = len.min(15) as u8;
    }

    /// Stores operand `n`. Slots past the last set operand stay
    /// [`OpKind::None`]; `op_count` follows the highest filled slot.
    pub fn set_op(&mut self, n: usize, kind: OpKind, register: Register) {
        if let (Some(k), Some(r)) = (self.op_kinds.get_mut(n), self.op_registers.get_mut(n)) {
            *k = kind;
            *r = register;
            self.op_count = self
                .op_kinds
                .iter()
                .rposition(|k| *k != OpKind::None)
                .map_or(0, |i| i as u8 + 1);
        }
    }

    pub fn set_memory(&mut self, memory: MemoryOperand) {
        self.memory = memory;
    }

    pub fn set_memory_size(&mut self, size: MemorySize) {
        self.memory.size = size;
    }

    pub fn set_memory_address64(&mut self, address: u64) {
        self.memory_address64 = address;
    }

    pub fn set_immediate(&mut self, value: u64) {
        self.immediate = value;
    }

    pub fn set_immediate_2nd(&mut self, value: u8) {
        self.immediate_2nd = value;
    }

    pub fn set_near_branch(&mut self, target: u64) {
        self.near_branch = target;
    }

    pub fn set_far_branch(&mut self, offset: u32, selector: u16) {
        self.far_branch = offset;
        self.far_selector = selector;
    }

    pub fn set_lock_prefix(&mut self, value: bool) {
        self.lock = value;
    }

    pub fn set_repe_prefix(&mut self, value: bool) {
        self.repe = value;
    }

    pub fn set_repne_prefix(&mut self, value: bool) {
        self.repne = value;
    }

    pub fn set_segment_prefix(&mut self, segment: Register) {
        self.segment_prefix = segment;
    }

    pub fn set_op_mask(&mut self, mask: Register) {
        self.op_mask = mask;
    }

    pub fn set_zeroing_masking(&mut self, value: bool) {
        self.zeroing_masking = value;
    }

    pub fn set_rounding_control(&mut self, rc: RoundingControl) {
        self.rounding_control = rc;
    }

    pub fn set_suppress_all_exceptions(&mut self, value: bool) {
        self.suppress_all_exceptions = value;
    }

    pub fn set_broadcast(&mut self, value: bool) {
        self.broadcast = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_invalid() {
        let instr = Instruction::new(Bitness::Bits32, 0x1000);
        assert!(instr.is_invalid());
        assert_eq!(instr.op_count(), 0);
        assert_eq!(instr.op_kind(3), OpKind::None);
        assert_eq!(instr.op_kind(9), OpKind::None);
        assert_eq!(instr.op_mask(), Register::None);
    }

    #[test]
    fn test_set_op_tracks_count() {
        let mut instr = Instruction::default();
        instr.set_op(0, OpKind::Register, Register::EAX);
        instr.set_op(1, OpKind::Immediate32, Register::None);
        assert_eq!(instr.op_count(), 2);
        assert_eq!(instr.op_register(0), Register::EAX);
        assert_eq!(instr.op_register(1), Register::None);
        instr.set_op(7, OpKind::Register, Register::EAX);
        assert_eq!(instr.op_count(), 2);
    }

    #[test]
    fn test_immediate_sign_extension() {
        let mut instr = Instruction::default();
        instr.set_op(0, OpKind::Register, Register::AX);
        instr.set_op(1, OpKind::Immediate8to16, Register::None);
        instr.set_immediate(0xFF);
        assert_eq!(instr.immediate8to16(), -1);
        assert_eq!(instr.immediate(1), u64::MAX);
        instr.set_op(1, OpKind::Immediate8, Register::None);
        assert_eq!(instr.immediate(1), 0xFF);
        assert_eq!(instr.immediate(0), 0);
    }

    #[test]
    fn test_next_ip_wraps() {
        let mut instr = Instruction::new(Bitness::Bits16, 0xFFFF);
        instr.set_len(2);
        assert_eq!(instr.next_ip(), 1);
        instr.set_len(40);
        assert_eq!(instr.len(), 15);
    }

    #[test]
    fn test_near_branch_target() {
        let mut instr = Instruction::new(Bitness::Bits32, 0);
        assert_eq!(instr.near_branch_target(), None);
        instr.set_op(0, OpKind::NearBranch32, Register::None);
        instr.set_near_branch(0x1234_5678);
        assert_eq!(instr.near_branch_target(), Some(0x1234_5678));
    }
}
