quantity!(CubicMeters, "m³", 1);
quantity!(CubicMetersPerHour, "m³/h", 2);
