mod file_assembler_tests;
mod render_determinism_tests;
mod test_utils;
