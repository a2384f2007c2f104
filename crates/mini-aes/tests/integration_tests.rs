use hex_literal::hex;
use mini_aes::{decrypt_block, encrypt_block, expand_key, Aes128, Aes128Key, RoundKeySchedule};

#[test]
fn test_encrypt1_1() {
    let key = hex!("80000000000000000000000000000000");
    let plaintext = hex!("00000000000000000000000000000000");
    let mut ciphertext = [0u8; 16];
    let expected_ciphertext = hex!("0edd33d3c621e546455bd8ba1418bec8");
    let cipher = Aes128::new(&key);
    cipher.encrypt1(&plaintext, &mut ciphertext);
    assert_eq!(ciphertext, expected_ciphertext);
}

#[test]
fn test_encrypt1_2() {
    let key = hex!("c0000000000000000000000000000000");
    let plaintext = hex!("00000000000000000000000000000000");
    let mut ciphertext = [0u8; 16];
    let expected_ciphertext = hex!("4bc3f883450c113c64ca42e1112a9e87");
    let cipher = Aes128::new(&key);
    cipher.encrypt1(&plaintext, &mut ciphertext);
    assert_eq!(ciphertext, expected_ciphertext);
}

#[test]
fn test_decrypt1_1() {
    let key = hex!("80000000000000000000000000000000");
    let ciphertext = hex!("0edd33d3c621e546455bd8ba1418bec8");
    let mut plaintext = [0u8; 16];
    let cipher = Aes128::new(&key);
    cipher.decrypt1(&ciphertext, &mut plaintext);
    assert_eq!(plaintext, [0u8; 16]);
}

#[test]
fn test_decrypt1_2() {
    let key = hex!("c0000000000000000000000000000000");
    let ciphertext = hex!("4bc3f883450c113c64ca42e1112a9e87");
    let mut plaintext = [0u8; 16];
    let cipher = Aes128::new(&key);
    cipher.decrypt1(&ciphertext, &mut plaintext);
    assert_eq!(plaintext, [0u8; 16]);
}

#[test]
fn fips197_appendix_b() {
    let round_keys = expand_key(&Aes128Key::from(hex!("2b7e151628aed2a6abf7158809cf4f3c")));
    let plaintext = hex!("3243f6a8885a308d313198a2e0370734");
    let ciphertext = hex!("3925841d02dc09fbdc118597196a0b32");
    assert_eq!(encrypt_block(&plaintext, &round_keys), ciphertext);
    assert_eq!(decrypt_block(&ciphertext, &round_keys), plaintext);
}

#[test]
fn fips197_appendix_c1() {
    let round_keys = expand_key(&Aes128Key::from(hex!("000102030405060708090a0b0c0d0e0f")));
    let plaintext = hex!("00112233445566778899aabbccddeeff");
    let ciphertext = hex!("69c4e0d86a7b0430d8cdb78070b4c55a");
    assert_eq!(encrypt_block(&plaintext, &round_keys), ciphertext);
    assert_eq!(decrypt_block(&ciphertext, &round_keys), plaintext);
}

#[test]
fn key_schedule_for_zero_key() {
    let round_keys = expand_key(&Aes128Key::from([0u8; 16]));
    let expected = [
        hex!("00000000000000000000000000000000"),
        hex!("62636363626363636263636362636363"),
        hex!("9b9898c9f9fbfbaa9b9898c9f9fbfbaa"),
        hex!("90973450696ccffaf2f457330b0fac99"),
        hex!("ee06da7b876a1581759e42b27e91ee2b"),
        hex!("7f2e2b88f8443e098dda7cbbf34b9290"),
        hex!("ec614b851425758c99ff09376ab49ba7"),
        hex!("217517873550620bacaf6b3cc61bf09b"),
        hex!("0ef903333ba9613897060a04511dfa9f"),
        hex!("b1d4d8e28a7db9da1d7bb3de4c664941"),
        hex!("b4ef5bcb3e92e21123e951cf6f8f188e"),
    ];
    assert_eq!(round_keys.round_keys(), &expected);
}

#[test]
fn key_schedule_for_fips_appendix_a_key() {
    let round_keys = expand_key(&Aes128Key::from(hex!("2b7e151628aed2a6abf7158809cf4f3c")));
    let expected = [
        hex!("2b7e151628aed2a6abf7158809cf4f3c"),
        hex!("a0fafe1788542cb123a339392a6c7605"),
        hex!("f2c295f27a96b9435935807a7359f67f"),
        hex!("3d80477d4716fe3e1e237e446d7a883b"),
        hex!("ef44a541a8525b7fb671253bdb0bad00"),
        hex!("d4d1c6f87c839d87caf2b8bc11f915bc"),
        hex!("6d88a37a110b3efddbf98641ca0093fd"),
        hex!("4e54f70e5f5fc9f384a64fb24ea6dc4f"),
        hex!("ead27321b58dbad2312bf5607f8d292f"),
        hex!("ac7766f319fadc2128d12941575c006e"),
        hex!("d014f9a8c9ee2589e13f0cc8b6630ca6"),
    ];
    assert_eq!(round_keys.round_keys(), &expected);
}

#[test]
fn test_encrypt8() {
    let key = hex!("0edd33d3c621e546455bd8ba1418bec8");
    let plaintext8 = hex!(
        "00000000000000000000000000000000"
        "01010101010101010101010101010101"
        "02020202020202020202020202020202"
        "03030303030303030303030303030303"
        "04040404040404040404040404040404"
        "05050505050505050505050505050505"
        "06060606060606060606060606060606"
        "07070707070707070707070707070707"
    );
    let mut ciphertext8 = [0u8; 128];
    let cipher = Aes128::new(&key);
    cipher.encrypt8(&plaintext8, &mut ciphertext8);
    for lane in 0..8 {
        let mut ciphertext1 = [0u8; 16];
        cipher.encrypt1(&[lane as u8; 16], &mut ciphertext1);
        assert_eq!(ciphertext8[lane * 16..(lane + 1) * 16], ciphertext1);
    }
}

#[test]
fn test_decrypt8() {
    let key = hex!("4bc3f883450c113c64ca42e1112a9e87");
    let ciphertext8 = hex!(
        "00000000000000000000000000000000"
        "01010101010101010101010101010101"
        "02020202020202020202020202020202"
        "03030303030303030303030303030303"
        "04040404040404040404040404040404"
        "05050505050505050505050505050505"
        "06060606060606060606060606060606"
        "07070707070707070707070707070707"
    );
    let mut plaintext8 = [0u8; 128];
    let cipher = Aes128::new(&key);
    cipher.decrypt8(&ciphertext8, &mut plaintext8);
    for lane in 0..8 {
        let mut plaintext1 = [0u8; 16];
        cipher.decrypt1(&[lane as u8; 16], &mut plaintext1);
        assert_eq!(plaintext8[lane * 16..(lane + 1) * 16], plaintext1);
    }

    let mut roundtrip = [0u8; 128];
    cipher.encrypt8(&plaintext8, &mut roundtrip);
    assert_eq!(roundtrip, ciphertext8);
}

#[test]
fn schedule_survives_byte_round_trip() {
    let cipher = Aes128::new(&hex!("2b7e151628aed2a6abf7158809cf4f3c"));
    let bytes = cipher.schedule().to_bytes();
    let restored = RoundKeySchedule::try_from(&bytes[..]).unwrap();
    assert_eq!(&restored, cipher.schedule());

    let plaintext = hex!("3243f6a8885a308d313198a2e0370734");
    assert_eq!(
        encrypt_block(&plaintext, &restored),
        hex!("3925841d02dc09fbdc118597196a0b32")
    );
}

#[test]
fn wrong_key_decryption_is_not_an_error() {
    let ciphertext = hex!("69c4e0d86a7b0430d8cdb78070b4c55a");
    let wrong = Aes128::new(&[0xffu8; 16]);
    let mut plaintext = [0u8; 16];
    wrong.decrypt1(&ciphertext, &mut plaintext);
    assert_ne!(plaintext, hex!("00112233445566778899aabbccddeeff"));
}
