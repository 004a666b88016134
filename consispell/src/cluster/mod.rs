//! Detection of inconsistent spelling variants of the same word within
//! one document.
//!
//! This is distinct from ordinary misspellings against a static word
//! list: a proper noun spelled two ways is wrong in neither spelling in
//! isolation, but one of them is wrong *in this document*. Clustering
//! groups the document's distinct normalized tokens by similarity and
//! resolves each group to one canonical spelling.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::constants::SIMILARITY_THRESHOLD;
use crate::lexicon::Lexicon;
use crate::speller::distance::edit_distance;
use crate::tokenizer::Token;
use crate::types::Ratio;

/// Similarity ratio between two normalized words:
/// `1 − distance / max(len)`, bounded to `[0, 1]`. Symmetric, and `1.0`
/// for identical strings (including two empty strings).
pub fn similarity(a: &str, b: &str) -> Ratio {
    let longest = a.chars().count().max(b.chars().count());

    if longest == 0 {
        return 1.0;
    }

    let distance = edit_distance(a, b) as Ratio;
    (1.0 - distance / longest as Ratio).clamp(0.0, 1.0)
}

/// Join threshold for the clustering pass.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// a variant joins a cluster when similarity to its key is strictly
    /// greater than this
    pub threshold: Ratio,
}

impl ClusterConfig {
    /// The stock threshold.
    pub const fn default() -> ClusterConfig {
        ClusterConfig {
            threshold: SIMILARITY_THRESHOLD,
        }
    }
}

/// Mapping from every non-canonical variant (normalized) to its cluster's
/// canonical surface spelling.
pub type VariantMap = HashMap<SmolStr, SmolStr>;

/// One distinct surface form of a variant, with document statistics.
#[derive(Debug)]
struct SurfaceStats {
    surface: SmolStr,
    count: usize,
    first_offset: usize,
}

/// One distinct normalized spelling, with its observed surface forms.
#[derive(Debug)]
struct Variant {
    normalized: SmolStr,
    surfaces: Vec<SurfaceStats>,
    count: usize,
    first_offset: usize,
}

impl Variant {
    fn new(token: &Token) -> Variant {
        Variant {
            normalized: token.normalized.clone(),
            surfaces: vec![SurfaceStats {
                surface: token.surface.clone(),
                count: 1,
                first_offset: token.offset,
            }],
            count: 1,
            first_offset: token.offset,
        }
    }

    fn record(&mut self, token: &Token) {
        self.count += 1;

        match self
            .surfaces
            .iter_mut()
            .find(|s| s.surface == token.surface)
        {
            Some(stats) => stats.count += 1,
            None => self.surfaces.push(SurfaceStats {
                surface: token.surface.clone(),
                count: 1,
                first_offset: token.offset,
            }),
        }
    }

    /// The representative surface: most frequent, ties broken by first
    /// occurrence in the document.
    fn best_surface(&self) -> &SmolStr {
        let mut best = &self.surfaces[0];

        for stats in &self.surfaces[1..] {
            if stats.count > best.count
                || (stats.count == best.count && stats.first_offset < best.first_offset)
            {
                best = stats;
            }
        }

        &best.surface
    }
}

/// A group of distinct normalized spellings judged mutually similar.
/// Invariant: every normalized value belongs to at most one cluster.
#[derive(Debug)]
struct Cluster {
    key: SmolStr,
    members: Vec<Variant>,
}

impl Cluster {
    fn new(variant: Variant) -> Cluster {
        Cluster {
            key: variant.normalized.clone(),
            members: vec![variant],
        }
    }

    /// Resolves the canonical member by precedence: a known-correct
    /// member wins outright; otherwise the highest occurrence count,
    /// ties broken by earliest first position.
    fn resolve<'a>(&'a self, lexicon: &Lexicon) -> &'a Variant {
        if let Some(exempt) = self
            .members
            .iter()
            .find(|v| lexicon.is_exempt(&v.normalized))
        {
            return exempt;
        }

        let mut best = &self.members[0];

        for variant in &self.members[1..] {
            if variant.count > best.count
                || (variant.count == best.count && variant.first_offset < best.first_offset)
            {
                best = variant;
            }
        }

        best
    }
}

/// Groups a document's distinct normalized tokens by similarity and
/// resolves each multi-variant group to one canonical spelling.
#[derive(Debug)]
pub struct VariantClusterer<'a> {
    lexicon: &'a Lexicon,
    config: ClusterConfig,
}

impl<'a> VariantClusterer<'a> {
    /// Creates a clusterer over the given lexicon and threshold.
    pub fn new(lexicon: &'a Lexicon, config: ClusterConfig) -> VariantClusterer<'a> {
        VariantClusterer { lexicon, config }
    }

    /// Runs the clustering pass over the full token sequence of one
    /// document and returns the variant map. Must see every token before
    /// any suggestion is finalized; canonical resolution needs global
    /// document statistics.
    pub fn cluster(&self, tokens: &[Token]) -> VariantMap {
        let mut order: Vec<SmolStr> = Vec::new();
        let mut variants: HashMap<SmolStr, Variant> = HashMap::new();

        for token in tokens {
            match variants.get_mut(&token.normalized) {
                Some(variant) => variant.record(token),
                None => {
                    order.push(token.normalized.clone());
                    variants.insert(token.normalized.clone(), Variant::new(token));
                }
            }
        }

        let mut clusters: Vec<Cluster> = Vec::new();

        // Known-correct spellings are never clustered against other keys.
        // Each anchors its own cluster, ahead of everything else, so a
        // similar variant joins the known-correct anchor no matter which
        // spelling the document uses first.
        for normalized in &order {
            if self.lexicon.is_exempt(normalized) {
                if let Some(variant) = variants.remove(normalized) {
                    clusters.push(Cluster::new(variant));
                }
            }
        }

        for normalized in &order {
            let variant = match variants.remove(normalized) {
                Some(v) => v,
                None => continue,
            };

            let joined = clusters
                .iter_mut()
                .find(|c| similarity(&c.key, normalized) > self.config.threshold);

            match joined {
                Some(cluster) => cluster.members.push(variant),
                None => clusters.push(Cluster::new(variant)),
            }
        }

        let mut map = VariantMap::new();

        for cluster in clusters.iter().filter(|c| c.members.len() > 1) {
            let canonical = cluster.resolve(self.lexicon);
            let surface = canonical.best_surface();

            for member in &cluster.members {
                if member.normalized != canonical.normalized {
                    map.insert(member.normalized.clone(), surface.clone());
                }
            }
        }

        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::Tokenize;

    fn tokens(text: &str) -> Vec<Token> {
        text.word_tokens().collect()
    }

    fn lexicon() -> Lexicon {
        Lexicon::from_words(["receive", "the", "and"], ["telangana"])
    }

    #[test]
    fn similarity_properties() {
        let words = ["", "a", "telangana", "telengana", "receive", "recieve"];

        for a in words {
            for b in words {
                let ratio = similarity(a, b);
                assert!((0.0..=1.0).contains(&ratio));
                assert_eq!(ratio, similarity(b, a));
            }
        }

        assert_eq!(similarity("telangana", "telangana"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
        assert!(similarity("telangana", "telengana") > 0.8);
        assert!(similarity("recieve", "receive") > SIMILARITY_THRESHOLD);
        assert!(similarity("cat", "dog") < SIMILARITY_THRESHOLD);
    }

    #[test]
    fn known_correct_anchor_overrides_frequency() {
        let lexicon = lexicon();
        let clusterer = VariantClusterer::new(&lexicon, ClusterConfig::default());

        // The misspelling is three times as frequent; the known-correct
        // spelling still wins.
        let map = clusterer.cluster(&tokens(
            "Telengana and Telengana and Telengana and Telangana",
        ));

        assert_eq!(map.get("telengana").map(SmolStr::as_str), Some("Telangana"));
        assert!(!map.contains_key("telangana"));
    }

    #[test]
    fn anchor_wins_regardless_of_document_order() {
        let lexicon = lexicon();
        let clusterer = VariantClusterer::new(&lexicon, ClusterConfig::default());

        let map = clusterer.cluster(&tokens("Telangana Telangana Telangana Telengana"));

        assert_eq!(map.get("telengana").map(SmolStr::as_str), Some("Telangana"));
    }

    #[test]
    fn frequency_resolution_without_anchor() {
        let lexicon = lexicon();
        let clusterer = VariantClusterer::new(&lexicon, ClusterConfig::default());

        let map = clusterer.cluster(&tokens("recieve receive receive receive"));

        assert_eq!(map.get("recieve").map(SmolStr::as_str), Some("receive"));
        assert!(!map.contains_key("receive"));
    }

    #[test]
    fn frequency_tie_prefers_first_position() {
        let lexicon = Lexicon::from_words(["the"], std::iter::empty::<&str>());
        let clusterer = VariantClusterer::new(&lexicon, ClusterConfig::default());

        let map = clusterer.cluster(&tokens("behaviour behavior"));

        assert_eq!(
            map.get("behavior").map(SmolStr::as_str),
            Some("behaviour")
        );
    }

    #[test]
    fn dissimilar_words_stay_apart() {
        let lexicon = lexicon();
        let clusterer = VariantClusterer::new(&lexicon, ClusterConfig::default());

        let map = clusterer.cluster(&tokens("cat dog cat dog bird"));

        assert!(map.is_empty());
    }

    #[test]
    fn case_variants_are_not_flagged() {
        let lexicon = lexicon();
        let clusterer = VariantClusterer::new(&lexicon, ClusterConfig::default());

        // Same normalized form in two casings is one variant, not an
        // inconsistency.
        let map = clusterer.cluster(&tokens("The the the The"));

        assert!(map.is_empty());
    }

    #[test]
    fn canonical_keeps_its_observed_casing() {
        let lexicon = Lexicon::from_words(["the"], std::iter::empty::<&str>());
        let clusterer = VariantClusterer::new(&lexicon, ClusterConfig::default());

        let map = clusterer.cluster(&tokens("Langenscheidt Langenscheidt Langenschiedt"));

        assert_eq!(
            map.get("langenschiedt").map(SmolStr::as_str),
            Some("Langenscheidt")
        );
    }

    #[test]
    fn threshold_is_configurable() {
        let lexicon = lexicon();
        let strict = VariantClusterer::new(
            &lexicon,
            ClusterConfig { threshold: 0.95 },
        );

        let map = strict.cluster(&tokens("recieve receive receive"));

        // 1 - 2/7 ≈ 0.71 does not pass a 0.95 threshold.
        assert!(map.is_empty());
    }
}
