//! Prime enumeration and primality testing.

/// All primes `p` with `2 <= p <= limit`, ascending (sieve of Eratosthenes).
pub fn prime_sieve(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }
    let Ok(n) = usize::try_from(limit) else {
        return Vec::new();
    };

    let mut composite = vec![false; n + 1];
    let mut primes = Vec::new();

    for i in 2..=n {
        if composite[i] {
            continue;
        }
        primes.push(i as u64);
        // Multiples below i*i were already struck by a smaller factor.
        let Some(start) = i.checked_mul(i) else {
            continue;
        };
        for multiple in (start..=n).step_by(i) {
            composite[multiple] = true;
        }
    }

    primes
}

/// Trial-division primality test over 6k±1 candidates.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut k = 5u64;
    while k <= n / k {
        if n % k == 0 || n % (k + 2) == 0 {
            return false;
        }
        k += 6;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sieve_elements_are_prime() {
        let primes = prime_sieve(1000);
        assert_eq!(primes.len(), 168);
        for p in &primes {
            assert!(is_prime(*p), "{p} is not prime");
        }
    }

    #[test]
    fn test_sieve_small() {
        assert!(prime_sieve(0).is_empty());
        assert!(prime_sieve(1).is_empty());
        assert_eq!(prime_sieve(2), vec![2]);
        assert_eq!(prime_sieve(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_is_prime() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(is_prime(7919));
        assert!(is_prime(2_147_483_647));
        assert!(!is_prime(u64::MAX));
    }
}
