use crate::cipher::{Cipher, CipherError};

/// A transposition cipher: the message is written in a zigzag over a fixed
/// number of rails and read off row by row.
///
/// A single rail degenerates to the identity transform; at least two rails
/// are needed for any actual transposition.
#[derive(Clone, Copy, Debug)]
pub struct RailFenceCipher {
    fence_height: usize,
}

impl RailFenceCipher {
    pub fn new(fence_height: usize) -> Result<Self, CipherError> {
        if fence_height == 0 {
            return Err(CipherError::ZeroRails);
        }
        Ok(Self { fence_height })
    }
}

/// The rail index visited at each column of the zigzag traversal: down from
/// rail 0 to the bottom rail, back up to rail 0, repeating.
fn rail_pattern(height: usize, length: usize) -> Vec<usize> {
    if height == 1 {
        return vec![0; length];
    }
    let mut pattern = Vec::with_capacity(length);
    let mut rail = 0usize;
    let mut moving_down = true;
    for _ in 0..length {
        pattern.push(rail);
        if moving_down {
            if rail + 1 == height {
                rail -= 1;
                moving_down = false;
            } else {
                rail += 1;
            }
        } else if rail == 0 {
            rail += 1;
            moving_down = true;
        } else {
            rail -= 1;
        }
    }
    pattern
}

impl Cipher for RailFenceCipher {
    fn encrypt(&mut self, plaintext: &[i64]) -> Result<Vec<i64>, CipherError> {
        let pattern = rail_pattern(self.fence_height, plaintext.len());
        let mut ciphertext = Vec::with_capacity(plaintext.len());
        for rail in 0..self.fence_height {
            for (column, &r) in pattern.iter().enumerate() {
                if r == rail {
                    ciphertext.push(plaintext[column]);
                }
            }
        }
        Ok(ciphertext)
    }

    fn decrypt(&self, ciphertext: &[i64]) -> Result<Vec<i64>, CipherError> {
        // Re-run the traversal to find which columns each rail owns, fill
        // them from the ciphertext in rail order, and the columns read back
        // in plaintext order.
        let pattern = rail_pattern(self.fence_height, ciphertext.len());
        let mut plaintext = vec![0i64; ciphertext.len()];
        let mut next = 0usize;
        for rail in 0..self.fence_height {
            for (column, &r) in pattern.iter().enumerate() {
                if r == rail {
                    plaintext[column] = ciphertext[next];
                    next += 1;
                }
            }
        }
        Ok(plaintext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping;

    #[test]
    fn three_rails_match_textbook_vector() {
        let mut cipher = RailFenceCipher::new(3).unwrap();
        let plaintext = mapping::to_codepoints("WEAREDISCOVEREDFLEEATONCE");
        let ciphertext = cipher.encrypt(&plaintext).unwrap();
        assert_eq!(
            mapping::to_text(&ciphertext),
            "WECRLTEERDSOEEFEAOCAIVDEN"
        );
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn single_rail_is_the_identity() {
        let mut cipher = RailFenceCipher::new(1).unwrap();
        let message = [5, 0, -3, 17];
        assert_eq!(cipher.encrypt(&message).unwrap(), message.to_vec());
        assert_eq!(cipher.decrypt(&message).unwrap(), message.to_vec());
    }

    #[test]
    fn zero_elements_survive_the_round_trip() {
        let mut cipher = RailFenceCipher::new(4).unwrap();
        let message = [0, 0, 1, 0, 2, 0, 0, 3, 0];
        let ciphertext = cipher.encrypt(&message).unwrap();
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), message.to_vec());
    }

    #[test]
    fn more_rails_than_elements_round_trips() {
        let mut cipher = RailFenceCipher::new(10).unwrap();
        let message = mapping::to_codepoints("abc");
        let ciphertext = cipher.encrypt(&message).unwrap();
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), message);
    }

    #[test]
    fn zero_rails_is_rejected() {
        assert_eq!(RailFenceCipher::new(0).unwrap_err(), CipherError::ZeroRails);
    }
}
