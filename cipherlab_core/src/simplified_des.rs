use log::debug;

use crate::bits;
use crate::cipher::{Cipher, CipherError};

/// Simplified DES: an 8-bit, two-round Feistel block cipher with a 10-bit
/// key expanded into two 8-bit subkeys.
///
/// Blocks and keys are bit arrays (0/1 elements). Decryption is the same
/// network with the subkey order reversed. The permutation tables and
/// S-boxes below are the standard S-DES teaching constants.
#[derive(Clone, Debug)]
pub struct SimplifiedDesCipher {
    k1: Vec<i64>,
    k2: Vec<i64>,
}

const BLOCK_BITS: usize = 8;
const KEY_BITS: usize = 10;

const P10: [usize; 10] = [3, 5, 2, 7, 4, 10, 1, 9, 8, 6];
const P8: [usize; 8] = [6, 3, 7, 4, 8, 5, 10, 9];
const IP: [usize; 8] = [2, 6, 3, 1, 4, 8, 5, 7];
const IP_INVERSE: [usize; 8] = [4, 1, 3, 5, 7, 2, 8, 6];
const EP: [usize; 8] = [4, 1, 2, 3, 2, 3, 4, 1];
const P4: [usize; 4] = [2, 4, 3, 1];

const S0: [[i64; 4]; 4] = [
    [1, 0, 3, 2],
    [3, 2, 1, 0],
    [0, 2, 1, 3],
    [3, 1, 3, 2],
];
const S1: [[i64; 4]; 4] = [
    [0, 1, 2, 3],
    [2, 0, 1, 3],
    [3, 0, 1, 0],
    [2, 1, 0, 3],
];

impl SimplifiedDesCipher {
    /// Derives the K1/K2 subkeys from a 10-bit key.
    pub fn new(key: &[i64]) -> Result<Self, CipherError> {
        if key.len() != KEY_BITS {
            return Err(CipherError::BlockLength {
                expected: KEY_BITS,
                actual: key.len(),
            });
        }
        if !bits::is_bit_array(key) {
            return Err(CipherError::NotABitArray);
        }

        let permuted = bits::permute(key, &P10);
        let left = bits::left_rotate(&permuted[..KEY_BITS / 2], 1);
        let right = bits::left_rotate(&permuted[KEY_BITS / 2..], 1);
        let k1 = bits::permute(&[left.clone(), right.clone()].concat(), &P8);

        // The second subkey rotates the already-rotated halves two more
        // positions (three total from the original key).
        let left = bits::left_rotate(&left, 2);
        let right = bits::left_rotate(&right, 2);
        let k2 = bits::permute(&[left, right].concat(), &P8);

        debug!("derived S-DES subkeys k1={:?} k2={:?}", k1, k2);
        Ok(Self { k1, k2 })
    }

    /// The Feistel round function: expand the right half to 8 bits, mix
    /// with the subkey, substitute through S0/S1, and permute to 4 bits.
    fn round_function(right: &[i64], subkey: &[i64]) -> Vec<i64> {
        let mixed = bits::xor(&bits::permute(right, &EP), subkey);
        let substituted = vec![
            sbox_lookup(&S0, &mixed[..4]),
            sbox_lookup(&S1, &mixed[4..]),
        ]
        .concat();
        bits::permute(&substituted, &P4)
    }

    fn transform(&self, input: &[i64], first: &[i64], second: &[i64]) -> Result<Vec<i64>, CipherError> {
        if input.len() != BLOCK_BITS {
            return Err(CipherError::BlockLength {
                expected: BLOCK_BITS,
                actual: input.len(),
            });
        }
        if !bits::is_bit_array(input) {
            return Err(CipherError::NotABitArray);
        }

        let permuted = bits::permute(input, &IP);
        let (left, right) = permuted.split_at(BLOCK_BITS / 2);

        // Round 1, then the Feistel swap, then round 2 on the swapped halves.
        let mixed = bits::xor(left, &Self::round_function(right, first));
        let output_left = bits::xor(right, &Self::round_function(&mixed, second));

        Ok(bits::permute(&[output_left, mixed].concat(), &IP_INVERSE))
    }
}

/// Looks up a 4-bit half in an S-box: bits {0,3} select the row and bits
/// {1,2} the column, each read as a 2-bit binary number; the entry comes
/// back as its 2-bit expansion.
fn sbox_lookup(sbox: &[[i64; 4]; 4], half: &[i64]) -> Vec<i64> {
    let row = (half[0] * 2 + half[3]) as usize;
    let column = (half[1] * 2 + half[2]) as usize;
    let entry = sbox[row][column];
    vec![entry >> 1, entry & 1]
}

impl Cipher for SimplifiedDesCipher {
    fn encrypt(&mut self, plaintext: &[i64]) -> Result<Vec<i64>, CipherError> {
        self.transform(plaintext, &self.k1, &self.k2)
    }

    fn decrypt(&self, ciphertext: &[i64]) -> Result<Vec<i64>, CipherError> {
        self.transform(ciphertext, &self.k2, &self.k1)
    }
}
