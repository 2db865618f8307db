//! Property tests over short generated programs.

use proptest::prelude::*;

use crate::common::builder::*;
use crate::common::harness::TestContext;

proptest! {
    #[test]
    fn push_then_pop_is_identity(reg in 0u8..7, val in any::<u8>()) {
        let mut ctx = TestContext::new()
            .load_program(&[ldi(reg, val), push(reg), ldi(reg, 0), pop(reg), hlt()]);
        let _ = ctx.run().unwrap();

        prop_assert_eq!(ctx.reg(reg), val);
        prop_assert_eq!(ctx.sp(), 0xFF);
    }

    #[test]
    fn jeq_and_jne_are_complementary(a in any::<u8>(), b in any::<u8>()) {
        // 0: LDI R0,a  3: LDI R1,b  6: LDI R2,16  9: CMP  12: J?? R2
        // 14: PRN R0   16: HLT
        let mut on_equal = TestContext::new()
            .load_program(&[ldi(0, a), ldi(1, b), ldi(2, 16), cmp(0, 1), jeq(2), prn(0), hlt()]);
        let mut on_differ = TestContext::new()
            .load_program(&[ldi(0, a), ldi(1, b), ldi(2, 16), cmp(0, 1), jne(2), prn(0), hlt()]);
        let _ = on_equal.run().unwrap();
        let _ = on_differ.run().unwrap();

        prop_assert_eq!(on_equal.output().is_empty(), a == b);
        prop_assert_eq!(on_differ.output().is_empty(), a != b);
        prop_assert_eq!(on_equal.cpu().flags.bits().count_ones(), 1);
    }

    #[test]
    fn straight_line_step_count(loads in prop::collection::vec((0u8..7, any::<u8>()), 0..40)) {
        let mut program: Vec<_> = loads.iter().map(|&(reg, imm)| ldi(reg, imm)).collect();
        program.push(hlt());
        let mut ctx = TestContext::new().load_program(&program);

        let summary = ctx.run().unwrap();

        prop_assert_eq!(summary.steps, loads.len() as u64 + 1);
        prop_assert_eq!(summary.pc, loads.len() * 3 + 1);
    }

    #[test]
    fn call_returns_to_following_instruction(target in 6u8..=250) {
        // 0: LDI R1,target  3: CALL R1  5: HLT  target: RET
        let mut image = vec![0u8; 256];
        image[..6].copy_from_slice(&assemble(&[ldi(1, target), call(1), hlt()]));
        image[usize::from(target)] = ret().encode()[0];
        let mut ctx = TestContext::new().load(&image);

        let summary = ctx.run().unwrap();

        prop_assert_eq!(summary.steps, 4);
        prop_assert_eq!(summary.pc, 6);
        prop_assert_eq!(ctx.sp(), 0xFF);
        prop_assert_eq!(ctx.cpu().stats.branches_taken, 2);
    }
}
