use anyhow::Result;
use chrono::Utc;
use rand::Rng;
use sha2::{Digest, Sha256};

const TOKEN_LIFETIME_HOURS: i64 = 2;

/// Emite um token anti-forgery novo, assinado com o segredo persistido
pub async fn issue_token() -> Result<String> {
    let secret = get_secret().await?;
    let issued_at = Utc::now().timestamp();
    let nonce = uuid::Uuid::new_v4().simple().to_string();
    Ok(build_token(&secret, issued_at, &nonce))
}

/// Confere assinatura e validade de um token recebido num form
pub async fn verify_token(token: &str) -> Result<bool> {
    let secret = get_secret().await?;
    Ok(verify_with_secret(&secret, token, Utc::now().timestamp()))
}

/// Garante que o segredo exista antes do primeiro request
pub async fn ensure_secret() -> Result<()> {
    get_secret().await?;
    Ok(())
}

// Formato do token: "{issued_at}.{nonce}.{assinatura_hex}"
fn build_token(secret: &str, issued_at: i64, nonce: &str) -> String {
    let signature = sign(secret, issued_at, nonce);
    format!("{}.{}.{}", issued_at, nonce, signature)
}

fn verify_with_secret(secret: &str, token: &str, now: i64) -> bool {
    let mut parts = token.splitn(3, '.');
    let (issued_at, nonce, signature) = match (parts.next(), parts.next(), parts.next()) {
        (Some(ts), Some(nonce), Some(sig)) => (ts, nonce, sig),
        _ => return false,
    };
    let issued_at: i64 = match issued_at.parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    if now > issued_at + TOKEN_LIFETIME_HOURS * 3600 {
        return false;
    }
    sign(secret, issued_at, nonce) == signature
}

fn sign(secret: &str, issued_at: i64, nonce: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{}.{}.{}", secret, issued_at, nonce).as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Obtem o segredo da tabela sys_settings, gerando um novo se preciso
async fn get_secret() -> Result<String> {
    match get_secret_from_db().await? {
        Some(secret) => Ok(secret),
        None => {
            let secret = generate_secret();
            save_secret_to_db(&secret).await?;
            Ok(secret)
        }
    }
}

/// Gera um segredo criptograficamente seguro (256 bits)
fn generate_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

async fn get_secret_from_db() -> Result<Option<String>> {
    use crate::shared::data::db::get_connection;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT value FROM sys_settings WHERE key = ?",
            ["antiforgery_secret".into()],
        ))
        .await?;

    match result {
        Some(row) => {
            let secret: String = row.try_get("", "value")?;
            Ok(Some(secret))
        }
        None => Ok(None),
    }
}

async fn save_secret_to_db(secret: &str) -> Result<()> {
    use crate::shared::data::db::get_connection;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let conn = get_connection();
    let now = Utc::now().to_rfc3339();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT OR REPLACE INTO sys_settings (key, value, description, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?)",
        [
            "antiforgery_secret".into(),
            secret.to_string().into(),
            "Segredo gerado automaticamente para tokens anti-forgery".into(),
            now.clone().into(),
            now.into(),
        ],
    ))
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "segredo-de-teste";

    #[test]
    fn test_issued_token_verifies() {
        let now = 1_700_000_000;
        let token = build_token(SECRET, now, "abc123");
        assert!(verify_with_secret(SECRET, &token, now));
        assert!(verify_with_secret(SECRET, &token, now + 60));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let issued = 1_700_000_000;
        let token = build_token(SECRET, issued, "abc123");
        let after_lifetime = issued + TOKEN_LIFETIME_HOURS * 3600 + 1;
        assert!(!verify_with_secret(SECRET, &token, after_lifetime));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let now = 1_700_000_000;
        let token = build_token(SECRET, now, "abc123");

        let mut parts: Vec<&str> = token.split('.').collect();
        parts[1] = "outro-nonce";
        let tampered = parts.join(".");

        assert!(!verify_with_secret(SECRET, &tampered, now));
        assert!(!verify_with_secret("outro-segredo", &token, now));
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let now = 1_700_000_000;
        assert!(!verify_with_secret(SECRET, "", now));
        assert!(!verify_with_secret(SECRET, "sem-pontos", now));
        assert!(!verify_with_secret(SECRET, "a.b", now));
        assert!(!verify_with_secret(SECRET, "xx.nonce.assinatura", now));
    }
}
