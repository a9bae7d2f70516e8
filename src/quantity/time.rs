quantity!(Hours, "h", 1);
