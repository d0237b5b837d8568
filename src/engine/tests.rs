extern crate std;
use super::*;
use crate::policy::{DomainRule, Framing, Padding, PhasePolicy};
use crate::primitive::{Gascon, Permutation, Xoodoo};
use aead::consts::{U4, U8};
use std::vec::Vec;

const RATE: usize = 8;

fn seeded<P: Permutation>() -> Duplex<P> {
    let mut duplex = Duplex::<P>::new();
    for (i, byte) in duplex.bytes_mut().iter_mut().enumerate() {
        *byte = i as u8;
    }
    duplex
}

#[test]
fn absorb_then_permute_pads_and_permutes_every_block() {
    let phase = DuplexPhase::absorb_then_permute(
        PhasePolicy::new(RATE, Framing::PadAlways).with_padding(Padding::last(0x80)),
        6,
    );
    let input: Vec<u8> = (0..11u8).collect();

    let mut expected = seeded::<Gascon>();
    expected.xor_at(0, &input[..8]);
    expected.permute(6);
    expected.xor_at(0, &input[8..]);
    expected.xor_at(3, &[0x80]);
    expected.permute(6);

    let mut duplex = seeded::<Gascon>();
    duplex.run(&phase, Data::Absorb(&input));
    assert_eq!(duplex.bytes(), expected.bytes());
}

#[test]
fn aligned_input_gets_a_padding_only_block() {
    let phase = DuplexPhase::absorb_then_permute(
        PhasePolicy::new(RATE, Framing::PadAlways).with_padding(Padding::last(0x80)),
        6,
    );

    let mut expected = seeded::<Gascon>();
    expected.xor_at(0, &[0xaa; 8]);
    expected.permute(6);
    expected.xor_at(0, &[0x80]);
    expected.permute(6);

    let mut duplex = seeded::<Gascon>();
    duplex.run(&phase, Data::Absorb(&[0xaa; 8]));
    assert_eq!(duplex.bytes(), expected.bytes());
}

#[test]
fn holding_last_leaves_final_block_unpermuted() {
    let phase = DuplexPhase::absorb_then_permute(
        PhasePolicy::new(RATE, Framing::PadAlways).with_padding(Padding::last(0x80)),
        6,
    )
    .holding_last();

    let mut expected = seeded::<Gascon>();
    expected.xor_at(0, &[1, 2, 3]);
    expected.xor_at(3, &[0x80]);

    let mut duplex = seeded::<Gascon>();
    duplex.run(&phase, Data::Absorb(&[1, 2, 3]));
    assert_eq!(duplex.bytes(), expected.bytes());
}

#[test]
fn permute_then_absorb_with_domains() {
    let policy = PhasePolicy::new(16, Framing::LastMayBeFull)
        .with_padding(Padding::every(0x01))
        .with_domain(DomainRule {
            entry: 0x03,
            every: 0,
            partial: 0,
            after: 0x40,
            last: 0,
        });
    let input = [0x5au8; 20];

    let mut expected = seeded::<Xoodoo>();
    expected.permute(12);
    expected.xor_at(0, &input[..16]);
    expected.xor_at(16, &[0x01]);
    expected.mix_domain(0x03);
    expected.permute(12);
    expected.xor_at(0, &input[16..]);
    expected.xor_at(4, &[0x01]);
    expected.mix_domain(0x40);

    let mut duplex = seeded::<Xoodoo>();
    duplex.run(&DuplexPhase::permute_then_absorb(policy, 12), Data::Absorb(&input));
    assert_eq!(duplex.bytes(), expected.bytes());
}

#[test]
fn domain_injected_before_permute() {
    let policy = PhasePolicy::new(16, Framing::LastMayBeFull).with_domain(DomainRule {
        entry: 0x80,
        every: 0,
        partial: 0,
        after: 0,
        last: 0,
    });
    let phase = DuplexPhase::permute_then_absorb(policy, 12).injecting_before_permute();

    let mut expected = seeded::<Xoodoo>();
    expected.mix_domain(0x80);
    expected.permute(12);
    expected.xor_at(0, b"xy");

    let mut duplex = seeded::<Xoodoo>();
    duplex.run(&phase, Data::Absorb(b"xy"));
    assert_eq!(duplex.bytes(), expected.bytes());
}

#[test]
fn skipped_empty_phase_still_mixes_after_domain() {
    let policy = PhasePolicy::new(RATE, Framing::PadAlways)
        .with_padding(Padding::last(0x80))
        .with_domain(DomainRule {
            after: 0x01,
            ..DomainRule::NONE
        })
        .skipping_empty();

    let mut expected = seeded::<Gascon>();
    expected.mix_domain(0x01);

    let mut duplex = seeded::<Gascon>();
    duplex.run(&DuplexPhase::absorb_then_permute(policy, 6), Data::Absorb(&[]));
    assert_eq!(duplex.bytes(), expected.bytes());
}

#[test]
fn encrypt_and_decrypt_leave_identical_states() {
    let phase = DuplexPhase::absorb_then_permute(
        PhasePolicy::new(RATE, Framing::PadAlways).with_padding(Padding::last(0x80)),
        6,
    )
    .holding_last();
    let plaintext: Vec<u8> = (100..121u8).collect();

    let mut sender = seeded::<Gascon>();
    let mut buffer = plaintext.clone();
    sender.run(&phase, Data::Encrypt(&mut buffer));
    assert_ne!(buffer, plaintext);

    // The first ciphertext block is the seeded rate XOR the plaintext.
    let seed = seeded::<Gascon>();
    for i in 0..RATE {
        assert_eq!(buffer[i], seed.bytes()[i] ^ plaintext[i]);
    }

    let mut receiver = seeded::<Gascon>();
    receiver.run(&phase, Data::Decrypt(&mut buffer));
    assert_eq!(buffer, plaintext);
    assert_eq!(sender.bytes(), receiver.bytes());
}

#[derive(Default)]
struct Recorder {
    calls: Vec<(&'static str, Vec<u8>)>,
}

impl StreamMac for &mut Recorder {
    type Tag = ();

    fn apply_keystream(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            *byte ^= 0xff;
        }
        self.calls.push(("keystream", data.to_vec()));
    }

    fn authenticate_ad(&mut self, ad: &[u8]) {
        self.calls.push(("ad", ad.to_vec()));
    }

    fn authenticate_ciphertext(&mut self, ciphertext: &[u8]) {
        self.calls.push(("ciphertext", ciphertext.to_vec()));
    }

    fn finalize(self) {
        self.calls.push(("finalize", Vec::new()));
    }
}

#[test]
fn stream_mac_sees_only_ciphertext() {
    let mut recorder = Recorder::default();
    let mut buffer = [0x00, 0x0f];
    stream::seal(&mut recorder, b"h", &mut buffer);
    assert_eq!(
        recorder.calls,
        [
            ("ad", b"h".to_vec()),
            ("keystream", [0xff, 0xf0].to_vec()),
            ("ciphertext", [0xff, 0xf0].to_vec()),
            ("finalize", Vec::new()),
        ]
    );

    let mut recorder = Recorder::default();
    stream::unseal(&mut recorder, b"h", &mut buffer);
    assert_eq!(buffer, [0x00, 0x0f]);
    assert_eq!(recorder.calls[1], ("ciphertext", [0xff, 0xf0].to_vec()));
}

/// XOR "cipher" with a 4-byte-message ceiling, for exercising the provided methods.
struct Toy;

impl AeadFamily for Toy {
    const ALGORITHM: &'static str = "toy";
    type Key = [u8; 4];
    type Nonce = [u8; 8];
    type Tag = [u8; 4];
    type KeySize = U4;
    type NonceSize = U8;
    type TagSize = U4;

    const MAX_AD_LEN: u64 = 2;
    const MAX_MESSAGE_LEN: u64 = 4;

    fn seal(key: &[u8; 4], _nonce: &[u8; 8], ad: &[u8], buffer: &mut [u8]) -> [u8; 4] {
        let mut tag = [ad.len() as u8; 4];
        for (i, byte) in buffer.iter_mut().enumerate() {
            *byte ^= key[i];
            tag[i] ^= *byte;
        }
        tag
    }

    fn unseal(key: &[u8; 4], _nonce: &[u8; 8], ad: &[u8], buffer: &mut [u8]) -> [u8; 4] {
        let mut tag = [ad.len() as u8; 4];
        for (i, byte) in buffer.iter_mut().enumerate() {
            tag[i] ^= *byte;
            *byte ^= key[i];
        }
        tag
    }
}

#[test]
fn provided_methods_validate_lengths() {
    let key = [1, 2, 3, 4];
    let nonce = [0u8; 8];
    let mut out = [0u8; 8];

    assert_eq!(
        Toy::encrypt(&key[..3], &nonce, b"", b"ab", &mut out),
        Err(InvalidParameter::KeyLength.into())
    );
    assert_eq!(
        Toy::encrypt(&key, &nonce[..7], b"", b"ab", &mut out),
        Err(InvalidParameter::NonceLength.into())
    );
    assert_eq!(
        Toy::encrypt(&key, &nonce, b"", b"abcde", &mut [0u8; 9]),
        Err(InvalidParameter::MessageTooLong.into())
    );
    assert_eq!(
        Toy::encrypt(&key, &nonce, b"xyz", b"ab", &mut out),
        Err(InvalidParameter::AssociatedDataTooLong.into())
    );
    assert_eq!(
        Toy::encrypt(&key, &nonce, b"", b"abcd", &mut [0u8; 7]),
        Err(InvalidParameter::BufferTooSmall.into())
    );
    assert_eq!(
        Toy::encrypt_detached(&key, &nonce, b"", &mut [0u8; 2], &mut [0u8; 3]),
        Err(InvalidParameter::TagLength.into())
    );
    assert_eq!(
        Toy::decrypt(&key, &nonce, b"", &[0u8; 3], &mut out),
        Err(InvalidParameter::BufferTooSmall.into())
    );
    assert_eq!(
        Toy::decrypt(&key, &nonce, b"", &[0u8; 7], &mut [0u8; 2]),
        Err(InvalidParameter::BufferTooSmall.into())
    );
}

#[test]
fn failed_decrypt_zeroes_only_the_plaintext_region() {
    let key = [1, 2, 3, 4];
    let nonce = [0u8; 8];
    let mut sealed = [0u8; 7];
    assert_eq!(Toy::encrypt(&key, &nonce, b"a", b"xyz", &mut sealed), Ok(7));

    let mut out = [0xeeu8; 5];
    assert_eq!(Toy::decrypt(&key, &nonce, b"a", &sealed, &mut out), Ok(3));
    assert_eq!(&out, b"xyz\xee\xee");

    sealed[6] ^= 1;
    let mut out = [0xeeu8; 5];
    assert_eq!(
        Toy::decrypt(&key, &nonce, b"a", &sealed, &mut out),
        Err(Error::AuthenticationFailure)
    );
    assert_eq!(out, [0, 0, 0, 0xee, 0xee]);
}

#[test]
fn size_constants_follow_type_lengths() {
    assert_eq!(Toy::KEY_LEN, 4);
    assert_eq!(Toy::NONCE_LEN, 8);
    assert_eq!(Toy::TAG_LEN, 4);
}
