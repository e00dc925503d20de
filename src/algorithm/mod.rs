mod chains;
mod ranking;
mod refine;


use crate::Character;

use chains::{Chain, ChainRegistry, DiscoveredChain, WorkStack};
use ranking::Ranking;

// marks the last position of a chain, never a valid text position
pub const END_OF_CHAIN: usize = usize::MAX;

/// Returns the suffix array and the inverse suffix array of `text`.
/// `alphabet_size` must be larger than the rank of every character of the text,
/// `None` if the ranks do not fit into `usize`.
pub fn chain_sort<C: Character>(
    text: &[C],
    alphabet_size: Option<usize>,
    induced_sorting: bool,
) -> (Vec<usize>, Vec<usize>) {
    let mut ranking = Ranking::new(text.len());
    let mut registry = ChainRegistry::for_alphabet_size(alphabet_size);
    let mut work_stack = WorkStack::new();

    let initial_chains = form_initial_chains(text, &mut ranking, &mut registry);

    tracing::debug!(
        alphabet_size = ?alphabet_size,
        num_initial_chains = initial_chains.len(),
        induced_sorting,
        "formed initial chains"
    );

    work_stack.push_sorted(initial_chains);

    let mut num_refinements = 0usize;
    let mut max_work_stack_len = work_stack.len();

    while let Some(chain) = work_stack.pop() {
        if ranking.is_singleton(chain.head) {
            ranking.rank_suffix(chain.head);
            continue;
        }

        let sub_chains = if induced_sorting {
            refine::refine_chain_with_induced_sorting(chain, text, &mut ranking, &mut registry)
        } else {
            refine::refine_chain(chain, text, &mut ranking, &mut registry)
        };

        work_stack.push_sorted(sub_chains);

        num_refinements += 1;
        max_work_stack_len = max_work_stack_len.max(work_stack.len());
    }

    debug_assert_eq!(ranking.num_ranked(), text.len());

    tracing::debug!(num_refinements, max_work_stack_len, "ranked all suffixes");

    ranking.into_arrays()
}

// links all suffixes with the same first character, the last occurrence becomes the chain head
fn form_initial_chains<C: Character>(
    text: &[C],
    ranking: &mut Ranking,
    registry: &mut ChainRegistry<C>,
) -> Vec<DiscoveredChain<C>> {
    let mut first_chars = Vec::new();

    for (position, &char) in text.iter().enumerate() {
        match registry.register(char, position) {
            Some(previous_position) => ranking.link(position, previous_position),
            None => {
                ranking.mark_end_of_chain(position);
                first_chars.push(char);
            }
        }
    }

    first_chars
        .into_iter()
        .filter_map(|first_char| {
            registry
                .last_position(first_char)
                .map(|head| DiscoveredChain {
                    distinguishing_char: first_char,
                    chain: Chain { head, length: 1 },
                })
        })
        .collect()
}
