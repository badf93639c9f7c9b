mod operation_descriptor_tests;
