mod operation_parse_tests;
