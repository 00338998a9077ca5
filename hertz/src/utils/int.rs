pub(crate) const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

pub(crate) const fn lcm(a: u128, b: u128) -> u128 {
    let gcd = gcd(a, b);
    if gcd == 0 {
        return 0;
    }
    a / gcd * b
}
