//! End-to-end tests for the public encrypt/decrypt surface

use passcrypt::crypto::{self, Envelope, NONCE_SIZE, SALT_SIZE};
use passcrypt::{decrypt, encrypt, Error};
use std::sync::Once;

const PASSWORD: &str = "correct-horse-battery-staple";

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[test]
fn test_hello_world_scenario() {
    init_tracing();

    let envelope = encrypt("hello world", PASSWORD, Some(10_000)).unwrap();
    let parsed: Envelope = envelope.parse().unwrap();

    assert_eq!(parsed.salt.len(), SALT_SIZE);
    assert_eq!(parsed.nonce.len(), NONCE_SIZE);
    assert_eq!(decrypt(&envelope, PASSWORD, Some(10_000)).unwrap(), "hello world");
}

#[test]
fn test_decrypts_existing_envelope() {
    // salt 0..16, nonce 100..112, 10000 iterations
    let stored = "0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 \
                  100 101 102 103 104 105 106 107 108 109 110 111 \
                  199 200 183 63 126 139 72 205 230 31 63 155 201 189 157 216 \
                  232 235 117 50 178 120 117 151 173 23 223";

    assert_eq!(decrypt(stored, PASSWORD, None).unwrap(), "hello world");
    assert!(matches!(
        decrypt(stored, PASSWORD, Some(10_001)),
        Err(Error::AuthenticationFailure)
    ));
}

#[test]
fn test_roundtrip_various_plaintexts() {
    init_tracing();

    let long = "x".repeat(10_000);
    let inputs = [
        "",
        "a",
        "hello world",
        "multi\nline\ttext",
        "unicode: héllo wörld ✓ 日本語 🔐",
        long.as_str(),
    ];

    for input in inputs {
        let envelope = encrypt(input, PASSWORD, Some(100)).unwrap();
        assert_eq!(decrypt(&envelope, PASSWORD, Some(100)).unwrap(), input);
    }
}

#[test]
fn test_passwords_used_verbatim() {
    for password in ["", " ", "pässwörd", "trailing "] {
        let envelope = encrypt("secret", password, Some(100)).unwrap();
        assert_eq!(decrypt(&envelope, password, Some(100)).unwrap(), "secret");
    }

    let envelope = encrypt("secret", "trailing ", Some(100)).unwrap();
    assert!(matches!(
        decrypt(&envelope, "trailing", Some(100)),
        Err(Error::AuthenticationFailure)
    ));
}

#[test]
fn test_wrong_password() {
    let envelope = encrypt("hello world", PASSWORD, Some(100)).unwrap();
    let result = decrypt(&envelope, "Tr0ub4dor&3", Some(100));
    assert!(matches!(result, Err(Error::AuthenticationFailure)));
}

#[test]
fn test_wrong_iteration_count() {
    let envelope = encrypt("hello world", PASSWORD, Some(1_000)).unwrap();

    assert!(matches!(
        decrypt(&envelope, PASSWORD, Some(999)),
        Err(Error::AuthenticationFailure)
    ));
    assert!(matches!(
        decrypt(&envelope, PASSWORD, None),
        Err(Error::AuthenticationFailure)
    ));
}

#[test]
fn test_tamper_any_byte() {
    init_tracing();

    let envelope = encrypt("hello world", PASSWORD, Some(10)).unwrap();
    let bytes = envelope.parse::<Envelope>().unwrap().to_bytes();

    for i in 0..bytes.len() {
        let mut tampered = bytes.clone();
        tampered[i] ^= 0x80;
        let tampered = Envelope::from_bytes(&tampered).unwrap().to_string();

        let result = decrypt(&tampered, PASSWORD, Some(10));
        assert!(
            matches!(result, Err(Error::AuthenticationFailure)),
            "flipping byte {} was not detected",
            i
        );
    }
}

#[test]
fn test_truncated_and_extended_envelopes() {
    let envelope = encrypt("hello world", PASSWORD, Some(10)).unwrap();
    let bytes = envelope.parse::<Envelope>().unwrap().to_bytes();

    let truncated = Envelope::from_bytes(&bytes[..bytes.len() - 1]).unwrap().to_string();
    assert!(matches!(
        decrypt(&truncated, PASSWORD, Some(10)),
        Err(Error::AuthenticationFailure)
    ));

    let extended = format!("{} 0", envelope);
    assert!(matches!(
        decrypt(&extended, PASSWORD, Some(10)),
        Err(Error::AuthenticationFailure)
    ));
}

#[test]
fn test_ciphertext_not_deterministic() {
    let first = encrypt("same input", PASSWORD, Some(100)).unwrap();
    let second = encrypt("same input", PASSWORD, Some(100)).unwrap();
    assert_ne!(first, second);

    let first_parsed: Envelope = first.parse().unwrap();
    let second_parsed: Envelope = second.parse().unwrap();
    assert_ne!(first_parsed.salt, second_parsed.salt);
    assert_ne!(first_parsed.nonce, second_parsed.nonce);

    assert_eq!(decrypt(&first, PASSWORD, Some(100)).unwrap(), "same input");
    assert_eq!(decrypt(&second, PASSWORD, Some(100)).unwrap(), "same input");
}

#[test]
fn test_malformed_envelope() {
    let result = decrypt("not a valid envelope", "any-password", None);
    assert!(matches!(result, Err(Error::MalformedEnvelope(_))));

    let result = decrypt("1 2 3", "any-password", None);
    assert!(matches!(result, Err(Error::MalformedEnvelope(_))));
}

#[test]
fn test_failures_are_decryption_failures() {
    let envelope = encrypt("hello world", PASSWORD, Some(10)).unwrap();

    let errors = [
        decrypt("garbage", PASSWORD, Some(10)).unwrap_err(),
        decrypt(&envelope, "wrong", Some(10)).unwrap_err(),
    ];
    for err in errors {
        assert!(err.is_decryption_failure(), "{}", err);
    }
}

#[test]
fn test_manual_composition_matches_encrypt() {
    let salt = [9u8; SALT_SIZE];
    let nonce = [1u8; NONCE_SIZE];

    let key = crypto::derive_key(PASSWORD.as_bytes(), &salt, 100).unwrap();
    let body = crypto::seal(key.key(), &nonce, b"composed").unwrap();
    let envelope = crypto::encode(&salt, &nonce, &body);

    assert_eq!(decrypt(&envelope, PASSWORD, Some(100)).unwrap(), "composed");
}

#[test]
fn test_concurrent_calls() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let plaintext = format!("thread {}", i);
                let envelope = encrypt(&plaintext, PASSWORD, Some(100)).unwrap();
                (envelope.clone(), decrypt(&envelope, PASSWORD, Some(100)).unwrap(), plaintext)
            })
        })
        .collect();

    let mut envelopes = Vec::new();
    for handle in handles {
        let (envelope, decrypted, plaintext) = handle.join().unwrap();
        assert_eq!(decrypted, plaintext);
        envelopes.push(envelope);
    }

    envelopes.sort();
    envelopes.dedup();
    assert_eq!(envelopes.len(), 8);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_async_concurrent_roundtrips() {
    init_tracing();

    let tasks: Vec<_> = (0..4)
        .map(|i| {
            tokio::spawn(async move {
                let plaintext = format!("task {}", i);
                let envelope =
                    passcrypt::encrypt_async(plaintext.clone(), PASSWORD.to_string(), Some(100))
                        .await?;
                let decrypted =
                    passcrypt::decrypt_async(envelope, PASSWORD.to_string(), Some(100)).await?;
                Ok::<_, Error>((plaintext, decrypted))
            })
        })
        .collect();

    for task in tasks {
        let (plaintext, decrypted) = task.await.unwrap().unwrap();
        assert_eq!(plaintext, decrypted);
    }
}

#[tokio::test]
async fn test_async_malformed_envelope() {
    let result = passcrypt::decrypt_async("nope".to_string(), PASSWORD.to_string(), None).await;
    assert!(matches!(result, Err(Error::MalformedEnvelope(_))));
}
