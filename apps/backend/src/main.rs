#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bilingual_flashcards_backend::run().await
}
