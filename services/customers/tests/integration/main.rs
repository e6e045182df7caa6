mod customer_test;
