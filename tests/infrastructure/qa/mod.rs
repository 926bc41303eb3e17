mod extractive_qa_client_test;
