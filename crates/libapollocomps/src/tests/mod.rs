mod ast_tests;
