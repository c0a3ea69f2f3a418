/// Mock flight strip banner used by `--test` to smoke-test the print path.
pub const TEST_STRIP: &str = "\
=============== TEST FLIGHT STRIP ===============
CS: C-GPT5   DEP: CYYZ   ARR: CYHZ
ROUTE: DCT YCF J576 YRI J563 ABBOT DCT
FL: 350   EOBT: 1530Z   WTC: M
EQUIP: SDFGHIRWY / PBN A1B2C3
=================================================
";

pub fn test_strip() -> String {
    TEST_STRIP.to_string()
}
