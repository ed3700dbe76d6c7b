//! `parley analyze`: Print the processed form of a message.

use parley_nlp::MessageProcessor;

pub fn run(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render(&MessageProcessor::default(), text)?);
    Ok(())
}

fn render(processor: &MessageProcessor, text: &str) -> Result<String, Box<dyn std::error::Error>> {
    let processed = processor.process(text)?;
    Ok(serde_json::to_string_pretty(&processed)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_processed_message_as_json() {
        let json = render(&MessageProcessor::default(), "Wat is Rust").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["original"], "Wat is Rust");
        assert_eq!(value["corrected"], "what is rust");
        assert_eq!(value["intent"], "question");
    }
}
