mod iterator_tests;
