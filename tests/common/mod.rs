//! Shared fixtures for the integration tests.
//!
//! No dictionary is available to the tests, so [`LatticeAnalyzer`] replays
//! IPADIC lattices written in MeCab's output format. Sentences without a
//! lattice are cut into one noun per rune.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use yomi::analysis::morphology::{MorphAnalyzer, Morpheme};
use yomi::analysis::tokenizer::japanese::JapaneseTokenizer;
use yomi::config::JapaneseTokenizerConfig;
use yomi::error::Result;

/// IPADIC keeps the base form in the seventh feature field.
const BASE_FORM_FIELD: usize = 6;

pub const KANSAI: &str = "関西国際空港";
pub const KANSAI_LATTICE: &str = "\
関西\t名詞,固有名詞,地域,一般,*,*,関西,カンサイ,カンサイ
国際\t名詞,一般,*,*,*,*,国際,コクサイ,コクサイ
空港\t名詞,一般,*,*,*,*,空港,クウコウ,クーコー";

pub const KANSAI_CLOSED: &str = "関西国際空港。";
pub const KANSAI_CLOSED_LATTICE: &str = "\
関西\t名詞,固有名詞,地域,一般,*,*,関西,カンサイ,カンサイ
国際\t名詞,一般,*,*,*,*,国際,コクサイ,コクサイ
空港\t名詞,一般,*,*,*,*,空港,クウコウ,クーコー
。\t記号,句点,*,*,*,*,。,。,。";

pub const MY_CAT: &str = "これらは私の猫";
pub const MY_CAT_LATTICE: &str = "\
これら\t名詞,代名詞,一般,*,*,*,これら,コレラ,コレラ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
私\t名詞,代名詞,一般,*,*,*,私,ワタシ,ワタシ
の\t助詞,連体化,*,*,*,*,の,ノ,ノ
猫\t名詞,一般,*,*,*,*,猫,ネコ,ネコ";

pub const EEL: &str = "私は鰻を食べ、猫を見た。";
pub const EEL_LATTICE: &str = "\
私\t名詞,代名詞,一般,*,*,*,私,ワタシ,ワタシ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
鰻\t名詞,一般,*,*,*,*,鰻,ウナギ,ウナギ
を\t助詞,格助詞,一般,*,*,*,を,ヲ,ヲ
食べ\t動詞,自立,*,*,一段,連用形,食べる,タベ,タベ
、\t記号,読点,*,*,*,*,、,、,、
猫\t名詞,一般,*,*,*,*,猫,ネコ,ネコ
を\t助詞,格助詞,一般,*,*,*,を,ヲ,ヲ
見\t動詞,自立,*,*,一段,連用形,見る,ミ,ミ
た\t助動詞,*,*,*,特殊・タ,基本形,た,タ,タ
。\t記号,句点,*,*,*,*,。,。,。";

pub const MERMAID: &str = "人魚は、南の方の海にばかり棲んでいるのではありません。";
pub const MERMAID_LATTICE: &str = "\
人魚\t名詞,一般,*,*,*,*,人魚,ニンギョ,ニンギョ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
、\t記号,読点,*,*,*,*,、,、,、
南\t名詞,一般,*,*,*,*,南,ミナミ,ミナミ
の\t助詞,連体化,*,*,*,*,の,ノ,ノ
方\t名詞,非自立,一般,*,*,*,方,ホウ,ホー
の\t助詞,連体化,*,*,*,*,の,ノ,ノ
海\t名詞,一般,*,*,*,*,海,ウミ,ウミ
に\t助詞,格助詞,一般,*,*,*,に,ニ,ニ
ばかり\t助詞,副助詞,*,*,*,*,ばかり,バカリ,バカリ
棲ん\t動詞,自立,*,*,五段・マ行,連用タ接続,棲む,スン,スン
で\t助詞,接続助詞,*,*,*,*,で,デ,デ
いる\t動詞,非自立,*,*,一段,基本形,いる,イル,イル
の\t名詞,非自立,一般,*,*,*,の,ノ,ノ
で\t助動詞,*,*,*,特殊・ダ,連用形,だ,デ,デ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
あり\t動詞,自立,*,*,五段・ラ行,連用形,ある,アリ,アリ
ませ\t助動詞,*,*,*,特殊・マス,未然形,ます,マセ,マセ
ん\t助動詞,*,*,*,不変化型,基本形,ん,ン,ン
。\t記号,句点,*,*,*,*,。,。,。";

/// Replays recorded lattices, one per sentence.
#[derive(Debug, Default)]
pub struct LatticeAnalyzer {
    sentences: HashMap<String, Vec<Morpheme>>,
}

impl LatticeAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the lattice of `sentence`, one `surface\tfeatures` line per
    /// morpheme.
    pub fn with_lattice(mut self, sentence: &str, lattice: &str) -> Self {
        let mut morphemes = Vec::new();
        let mut offset = 0;

        for (index, line) in lattice.lines().enumerate() {
            let (surface, features) = line.split_once('\t').unwrap();
            let features: Vec<&str> = features.split(',').collect();
            let pos = features.iter().take(4).map(|f| f.to_string()).collect();

            let mut morpheme = Morpheme::new(surface, offset, pos, index);
            if let Some(base_form) = features.get(BASE_FORM_FIELD).filter(|f| **f != "*") {
                morpheme = morpheme.with_base_form(*base_form);
            }
            offset += surface.len();
            morphemes.push(morpheme);
        }
        assert_eq!(offset, sentence.len(), "lattice does not cover {sentence}");

        self.sentences.insert(sentence.to_string(), morphemes);
        self
    }

    /// All recorded sentences of this module.
    pub fn ipadic() -> Self {
        Self::new()
            .with_lattice(KANSAI, KANSAI_LATTICE)
            .with_lattice(KANSAI_CLOSED, KANSAI_CLOSED_LATTICE)
            .with_lattice(MY_CAT, MY_CAT_LATTICE)
            .with_lattice(EEL, EEL_LATTICE)
            .with_lattice(MERMAID, MERMAID_LATTICE)
    }
}

impl MorphAnalyzer for LatticeAnalyzer {
    fn analyze(&self, sentence: &str) -> Result<Vec<Morpheme>> {
        if let Some(morphemes) = self.sentences.get(sentence) {
            return Ok(morphemes.clone());
        }

        Ok(sentence
            .char_indices()
            .enumerate()
            .map(|(index, (offset, c))| {
                let pos = vec!["名詞".into(), "一般".into(), "*".into(), "*".into()];
                Morpheme::new(c.to_string(), offset, pos, index)
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "lattice"
    }
}

/// A tokenizer over the recorded lattices, configured like `dict: ipa`.
pub fn tokenizer(config: &JapaneseTokenizerConfig) -> JapaneseTokenizer {
    JapaneseTokenizer::with_config(Arc::new(LatticeAnalyzer::ipadic()), config).unwrap()
}

/// `(text, position, start, end)` of each token.
pub fn spans(tokens: &[yomi::analysis::token::Token]) -> Vec<(String, usize, usize, usize)> {
    tokens
        .iter()
        .map(|t| (t.text.clone(), t.position, t.start_offset, t.end_offset))
        .collect()
}
