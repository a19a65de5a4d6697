mod neighbor_tests;
