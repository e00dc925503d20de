use super::chains::{Chain, ChainRegistry, DiscoveredChain};
use super::ranking::Ranking;
use crate::Character;

/// A suffix whose order inside its chain is already determined by the rank of the
/// suffix starting right after the shared prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotedSuffix {
    pub position: usize,
    pub induced_rank: usize,
}

/// Splits `chain` by the character following the shared prefix and returns the resulting
/// sub-chains (unsorted). Suffixes that end with the shared prefix are ranked right away.
/// Suffixes whose continuation is already ranked are ranked by that induced rank,
/// after the whole chain was scanned.
pub fn refine_chain_with_induced_sorting<C: Character>(
    chain: Chain,
    text: &[C],
    ranking: &mut Ranking,
    registry: &mut ChainRegistry<C>,
) -> Vec<DiscoveredChain<C>> {
    registry.clear();
    let mut sub_chains = Vec::new();
    let mut noted_suffixes = Vec::new();

    let mut current_position = Some(chain.head);

    while let Some(position) = current_position {
        // the link has to be read before the entry of this position is overwritten
        current_position = ranking.next_in_chain(position);

        let continuation = position + chain.length;

        if continuation >= text.len() {
            ranking.rank_suffix(position);
        } else if let Some(induced_rank) = ranking.rank(continuation) {
            noted_suffixes.push(NotedSuffix {
                position,
                induced_rank,
            });
        } else {
            extend_into_sub_chain(
                position,
                chain.length,
                text,
                ranking,
                registry,
                &mut sub_chains,
            );
        }
    }

    tracing::trace!(
        head = chain.head,
        length = chain.length,
        num_sub_chains = sub_chains.len(),
        num_noted_suffixes = noted_suffixes.len(),
        "refined chain with induced sorting"
    );

    rank_noted_suffixes(noted_suffixes, ranking);

    sub_chains
}

/// Like `refine_chain_with_induced_sorting`, but never uses already known ranks. Every
/// suffix that does not end with the shared prefix is extended by one character.
pub fn refine_chain<C: Character>(
    chain: Chain,
    text: &[C],
    ranking: &mut Ranking,
    registry: &mut ChainRegistry<C>,
) -> Vec<DiscoveredChain<C>> {
    registry.clear();
    let mut sub_chains = Vec::new();

    let mut current_position = Some(chain.head);

    while let Some(position) = current_position {
        // the link has to be read before the entry of this position is overwritten
        current_position = ranking.next_in_chain(position);

        if position + chain.length >= text.len() {
            ranking.rank_suffix(position);
        } else {
            extend_into_sub_chain(
                position,
                chain.length,
                text,
                ranking,
                registry,
                &mut sub_chains,
            );
        }
    }

    tracing::trace!(
        head = chain.head,
        length = chain.length,
        num_sub_chains = sub_chains.len(),
        "refined chain"
    );

    sub_chains
}

// appends the position to the sub-chain of the next character, or starts that sub-chain
fn extend_into_sub_chain<C: Character>(
    position: usize,
    prefix_length: usize,
    text: &[C],
    ranking: &mut Ranking,
    registry: &mut ChainRegistry<C>,
    sub_chains: &mut Vec<DiscoveredChain<C>>,
) {
    let next_char = text[position + prefix_length];
    ranking.mark_end_of_chain(position);

    match registry.register(next_char, position) {
        Some(previous_position) => ranking.link(previous_position, position),
        None => sub_chains.push(DiscoveredChain {
            distinguishing_char: next_char,
            chain: Chain {
                head: position,
                length: prefix_length + 1,
            },
        }),
    }
}

// every already ranked suffix is smaller than every unranked one, so the noted suffixes
// precede all suffixes that are still in sub-chains
fn rank_noted_suffixes(mut noted_suffixes: Vec<NotedSuffix>, ranking: &mut Ranking) {
    noted_suffixes.sort_unstable_by_key(|noted| noted.induced_rank);

    for noted in noted_suffixes {
        ranking.rank_suffix(noted.position);
    }
}
