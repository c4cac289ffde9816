mod compose_tests;
