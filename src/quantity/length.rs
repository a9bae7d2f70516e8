quantity!(Meters, "m", 1);
quantity!(MetersPerSecondSquared, "m/s²", 2);
