//! Generates a keypair, round-trips a 4-byte plaintext through it and
//! prints every intermediate value.

use std::process::exit;

use rand::rngs::OsRng;
use rsa32::{RsaPrivateKey, RsaPublicKey};

fn main() {
    let plain_text: [u8; 4] = [0x12, 0x34, 0x56, 0x78];
    let plain_data = u32::from_le_bytes(plain_text);

    let mut rng = OsRng;
    let private_key = match RsaPrivateKey::new(&mut rng) {
        Ok(key) => key,
        Err(err) => {
            eprintln!("key generation failed: {err}");
            exit(1);
        }
    };
    let public_key = RsaPublicKey::from(&private_key);

    let (p, q) = private_key.primes();
    println!("0. Key generation succeeded");
    println!(" p : {p}");
    println!(" q : {q}");
    println!(" e : {}", private_key.e());
    println!(" d : {}", private_key.d());
    println!(" N : {}", private_key.n());
    println!();

    let encrypted_data = match public_key.encrypt(plain_data) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("encryption failed: {err}");
            exit(1);
        }
    };
    println!("1. plain text : {plain_data}");
    println!("2. encrypted plain text : {encrypted_data}");
    println!();

    let decrypted_data = match private_key.decrypt(encrypted_data) {
        Ok(m) => m,
        Err(err) => {
            eprintln!("decryption failed: {err}");
            exit(1);
        }
    };
    println!("3. cipher text : {encrypted_data}");
    println!("4. decrypted plain text : {decrypted_data}");
    println!();

    if decrypted_data == plain_data {
        println!("RSA Decryption: SUCCESS!");
    } else {
        println!("RSA Decryption: FAILURE!");
        exit(1);
    }
}
