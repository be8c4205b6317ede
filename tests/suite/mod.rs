mod showcase;
