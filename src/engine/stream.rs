//! Encrypt-then-MAC composition for the stream-cipher families.
//!
//! Encryption authenticates the ciphertext after producing it. Decryption authenticates the
//! ciphertext before turning it back into plaintext, so the MAC never sees plaintext.

/// A keystream and a MAC keyed for one message.
pub trait StreamMac {
    /// Tag produced by [`finalize`](Self::finalize).
    type Tag;

    /// XOR the keystream into `data`.
    fn apply_keystream(&mut self, data: &mut [u8]);

    /// Feed the associated data to the MAC.
    fn authenticate_ad(&mut self, ad: &[u8]);

    /// Feed the ciphertext to the MAC.
    fn authenticate_ciphertext(&mut self, ciphertext: &[u8]);

    /// Finish the MAC.
    fn finalize(self) -> Self::Tag;
}

/// Encrypt `buffer` in place and return the tag.
pub fn seal<S: StreamMac>(mut stream: S, ad: &[u8], buffer: &mut [u8]) -> S::Tag {
    stream.authenticate_ad(ad);
    stream.apply_keystream(buffer);
    stream.authenticate_ciphertext(buffer);
    stream.finalize()
}

/// Decrypt `buffer` in place and return the expected tag.
pub fn unseal<S: StreamMac>(mut stream: S, ad: &[u8], buffer: &mut [u8]) -> S::Tag {
    stream.authenticate_ad(ad);
    stream.authenticate_ciphertext(buffer);
    stream.apply_keystream(buffer);
    stream.finalize()
}
