mod test_sm4_ecb;
