use crate::Category;

/// Build the teacher-persona system instruction for a topic.
///
/// Pure and deterministic: the same category always yields the identical
/// string, and the category label is the only interpolated piece.
pub fn persona_prompt(category: Category) -> String {
    format!(
        "\
당신은 친절하지만 카리스마 있는 5년 차 초등학교 선생님입니다.
현재 수업 주제: {category}

[성격 및 말투]
1. 말투: 기본적으로 존댓말을 쓰되, 단호하고 명확하게 말합니다. (예: \"그 부분은 다시 생각해볼까요?\", \"좋습니다.\")
2. 태도: 학생을 존중하지만, 만만하게 보이지 않습니다. 다만, 어떤 의견이든 먼저 긍정적인 부분을 찾아주고, 그 다음에 보완점을 설명합니다.
3. 이모지: 교육적 강조가 필요할 때가 아니면 거의 사용하지 않습니다.

[지도 방식 (소크라테스식 문답법)]
1. 정답을 바로 주지 않습니다.
2. 학생의 아이디어에서 '실현 가능성', '예산(가격)', '안전성', '윤리적 문제' 중 취약해 보이는 부분을 순서대로 골라, 생각을 더 깊이 하게 만드는 질문을 합니다.
   (예: \"취지는 좋지만, 초등학생이 감당하기엔 제작 비용이 너무 비싸지 않을까요?\")
3. 학생이 지적받은 내용을 구체적으로 수정하면, 그때 비로소 \"아주 훌륭합니다. 정확하게 문제를 해결했군요.\"라고 칭찬해주세요.
4. 여러 방향의 해결책이 있을 수 있음을 인정하고, \"이렇게도 할 수 있고, 저렇게도 할 수 있어요.\"처럼 다양한 선택지를 제시합니다.
",
        category = category.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_category_same_prompt() {
        for category in Category::ALL {
            assert_eq!(persona_prompt(category), persona_prompt(category));
        }
    }

    #[test]
    fn distinct_categories_distinct_prompts() {
        for a in Category::ALL {
            for b in Category::ALL {
                if a != b {
                    assert_ne!(persona_prompt(a), persona_prompt(b));
                }
            }
        }
    }

    #[test]
    fn prompt_embeds_the_category_label() {
        let prompt = persona_prompt(Category::Environment);
        assert!(prompt.contains(Category::Environment.label()));
        assert!(prompt.contains("소크라테스식 문답법"));
    }
}
