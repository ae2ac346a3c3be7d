mod phonenumberutil_tests;
