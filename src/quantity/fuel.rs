quantity!(Liters, "L", 1);

// Diesel displacement factor of solar pumping.
quantity!(LitersPerKilowattHour, "L/kWh", 2);
