mod collect_leaf_paths_tests;
