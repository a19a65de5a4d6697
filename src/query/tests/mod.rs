mod circle_query_tests;
