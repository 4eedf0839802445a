//! AES-256 in CFB mode with 1-bit feedback.
//!
//! No RustCrypto mode crate covers the 1-bit segment size, so the shift
//! register is driven directly over the raw block cipher. Bits are processed
//! most significant first, matching NIST SP 800-38A and OpenSSL's CFB1.

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256, Block};

use crate::cipher::{ModeCipher, invalid_length};
use crate::config::IV_SIZE;
use crate::error::Result;
use crate::key::{Iv, SymmetricKey};

pub struct Cfb1;

impl ModeCipher for Cfb1 {
    fn encrypt(key: &SymmetricKey, iv: &Iv, plaintext: &[u8]) -> Result<Vec<u8>> {
        process(key, iv, plaintext, Direction::Encrypt)
    }

    fn decrypt(key: &SymmetricKey, iv: &Iv, ciphertext: &[u8]) -> Result<Vec<u8>> {
        process(key, iv, ciphertext, Direction::Decrypt)
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn process(key: &SymmetricKey, iv: &Iv, input: &[u8], direction: Direction) -> Result<Vec<u8>> {
    let cipher = Aes256::new_from_slice(key.expose_secret()).map_err(invalid_length)?;
    let mut register = *iv.as_bytes();
    let mut output = Vec::with_capacity(input.len());

    for &byte in input {
        let mut out_byte = 0u8;
        for shift in (0..8).rev() {
            let mut block = Block::clone_from_slice(&register);
            cipher.encrypt_block(&mut block);

            let in_bit = (byte >> shift) & 1;
            let out_bit = in_bit ^ (block[0] >> 7);
            out_byte |= out_bit << shift;

            // the register always takes the ciphertext bit
            let feedback = match direction {
                Direction::Encrypt => out_bit,
                Direction::Decrypt => in_bit,
            };
            shift_in(&mut register, feedback);
        }
        output.push(out_byte);
    }

    Ok(output)
}

fn shift_in(register: &mut [u8; IV_SIZE], bit: u8) {
    for i in 0..IV_SIZE - 1 {
        register[i] = (register[i] << 1) | (register[i + 1] >> 7);
    }
    register[IV_SIZE - 1] = (register[IV_SIZE - 1] << 1) | bit;
}
