use alloc::vec::Vec;

use crate::LanguageTag;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateSources {
    pub explicit: Option<LanguageTag>,
    pub session: Option<LanguageTag>,
    pub accepted: Vec<LanguageTag>,
}

/// Languages to try, most preferred first. Always ends with the default
/// language and is never deduplicated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateList {
    tags: Vec<LanguageTag>,
}

impl CandidateList {
    pub fn as_slice(&self) -> &[LanguageTag] {
        &self.tags
    }

    pub fn iter(&self) -> core::slice::Iter<'_, LanguageTag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn first(&self) -> Option<&LanguageTag> {
        self.tags.first()
    }

    pub fn contains(&self, tag: &LanguageTag) -> bool {
        self.tags.contains(tag)
    }

    pub fn into_vec(self) -> Vec<LanguageTag> {
        self.tags
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a LanguageTag;
    type IntoIter = core::slice::Iter<'a, LanguageTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

pub fn build_candidates(sources: CandidateSources, default_lang: &LanguageTag) -> CandidateList {
    let CandidateSources {
        explicit,
        session,
        accepted,
    } = sources;

    let mut tags = Vec::with_capacity(accepted.len() + 3);
    tags.extend(explicit);
    tags.extend(session);
    tags.extend(accepted);
    tags.push(default_lang.clone());
    CandidateList { tags }
}
