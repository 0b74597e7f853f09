//! Output writers for the CLI

use std::io::Write;

use clap::ValueEnum;

use crate::core::AnalysisResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_result(&mut self, result: &AnalysisResult) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_result(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(result)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_result(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        let mbti = &result.mbti_result;
        writeln!(
            self.writer,
            "{} {}",
            mbti.temperament.code(),
            result.type_nickname
        )?;
        writeln!(self.writer, "{}", result.sanmei_result.full_type)?;
        writeln!(
            self.writer,
            "I-E {} / N-S {} / F-T {} / J-P {}",
            mbti.ie_scale, mbti.ns_scale, mbti.ft_scale, mbti.jp_scale
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", result.overview)?;

        if let Some(seimei) = &result.sei_mei_result {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "姓名判断: 天格 {} / 地格 {} / 人格 {} (総画 {})",
                seimei.heaven_number, seimei.earth_number, seimei.human_number, seimei.name_total
            )?;
            writeln!(self.writer, "{}", seimei.good_luck)?;
        }

        if let Some(pillars) = &result.four_pillars_result {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "四柱推命: 日主 {}{} ({})",
                pillars.heavenly_stem.symbol(),
                pillars.earthly_branch.symbol(),
                pillars.day_master.symbol()
            )?;
            writeln!(self.writer, "{}", pillars.life_theme)?;
        }

        Ok(())
    }
}

/// Create a writer for the requested format over any byte sink
pub fn create_writer<W: Write + 'static>(writer: W, format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::run_assessment;
    use crate::core::{BirthDate, Gender};

    fn sample_result() -> AnalysisResult {
        run_assessment(
            &[],
            &BirthDate {
                year: 2000,
                month: 1,
                day: 1,
                hour: Some(0),
                minute: None,
            },
            Gender::Other,
            Some("山田"),
            Some("太郎"),
        )
        .unwrap()
    }

    #[test]
    fn test_json_writer_round_trips() {
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf).write_result(&sample_result()).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["mbtiResult"]["type"], "INTJ");
        assert_eq!(parsed["sanmeiResult"]["element"], "土");
        assert_eq!(parsed["seiMeiResult"]["nameTotal"], 22);
    }

    #[test]
    fn test_terminal_writer_mentions_type() {
        let mut buf = Vec::new();
        TerminalWriter::new(&mut buf).write_result(&sample_result()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("INTJ"));
        assert!(text.contains("土命・陰"));
    }
}
